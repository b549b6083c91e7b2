//! Test fixtures for lazyrel
//!
//! A site here is a plain value, not a process-wide registry. Tests build
//! one with [`set_up`], pass it to whatever needs it, and drop it when done.
//!
//! - `Demo`: minimal content object identified by a string id
//! - `IntIds`: stable integer ids for content objects
//! - `Site`: the objects plus the site's `IntIds`
//! - `content_setup` / `chinatown_setup`: canned content
//! - `Site::resolve_lazy`: int ids resolved to objects only when read

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod demo;
pub mod error;
pub mod intids;
pub mod setup;
pub mod site;

pub use demo::Demo;
pub use error::FixtureError;
pub use intids::{IntId, IntIds};
pub use setup::{
    chinatown_setup, content_setup, init_test_tracing, set_up, CHINATOWN_CHARACTERS,
    CONTENT_OBJECT_COUNT,
};
pub use site::{Resolver, Site};
