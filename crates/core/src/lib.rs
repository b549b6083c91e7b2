//! Core types and traits for lazyrel
//!
//! This crate defines the pieces shared by every lazy sequence flavour:
//! - Producer: the on-demand element source, plus ready-made adapters
//! - Extent / Access: what a producer declares about itself up front
//! - Realizer: the per-sequence realization state machine
//! - Slots: the cache-write seam the realizer stores elements through
//! - Error: `LazyError` and `ConfigError`
//! - Config: `LazyConfig`, loaded from `lazyrel.toml`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod producer;
pub mod realize;

pub use config::{LazyConfig, CONFIG_FILE_NAME};
pub use error::{ConfigError, LazyError, LazyResult};
pub use producer::{
    Access, Extent, FnProducer, IterProducer, MapProducer, Producer, TryIterProducer, VecProducer,
};
pub use realize::{Realizer, Slots};
