//! Lazy sequence scenario tests
//!
//! End-to-end scenarios over the public `lazyrel` API:
//! finite and unbounded producers, producer failures, configuration,
//! shared sequences and the site fixture.

#[path = "../common/mod.rs"]
mod common;

mod configuration;
mod failures;
mod finite_producers;
mod site_fixture;
mod unbounded_producers;
