//! Concurrency layer for lazyrel
//!
//! This crate provides [`SharedLazySequence`], the thread-safe counterpart
//! of `LazySequence`:
//! - Realized elements live in a sharded `DashMap`; cache hits never touch
//!   the producer lock
//! - Misses take one producer lock and recheck the cache after acquiring it,
//!   so each index is produced at most once no matter how many threads race
//! - Elements are handed out as `Arc<T>`; every reader of an index gets the
//!   same allocation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod shared;

pub use shared::{SharedIter, SharedLazySequence};
