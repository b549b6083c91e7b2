//! lazyrel - lazy, memoizing sequences
//!
//! A lazy sequence wraps a producer and presents a read-only, list-like
//! view over it. Each element is computed at most once, the first time
//! something needs it, and served from a cache afterwards.
//!
//! # Quick Start
//!
//! ```
//! use lazyrel::{IterProducer, LazyError, LazySequence};
//!
//! // Infinite producer: squares of the naturals
//! let squares = LazySequence::new(IterProducer::unbounded((0u64..).map(|n| n * n)));
//!
//! assert_eq!(*squares.get(4).unwrap(), 16);
//! assert_eq!(squares.len(), Err(LazyError::LengthUnknown));
//! ```
//!
//! # Architecture
//!
//! - `lazyrel-core`: producers, the realization state machine, errors, config
//! - `lazyrel-lazylist`: [`LazySequence`], single-threaded
//! - `lazyrel-concurrency`: [`SharedLazySequence`], at-most-once production
//!   across threads

pub use lazyrel_concurrency::{SharedIter, SharedLazySequence};
pub use lazyrel_core::{
    Access, ConfigError, Extent, FnProducer, IterProducer, LazyConfig, LazyError, LazyResult,
    MapProducer, Producer, Realizer, Slots, TryIterProducer, VecProducer, CONFIG_FILE_NAME,
};
pub use lazyrel_lazylist::{Iter, LazySequence};
