//! Single-threaded lazy sequence
//!
//! [`LazySequence`] presents a read-only, list-like view over a producer,
//! computing each element at most once:
//! - `get(i)`: cached read, or realize up to `i` and cache along the way
//! - `len()`: declared length, full realization, or `LengthUnknown`
//! - `iter()`: restartable, reuses the cache
//! - `to_vec()`: eager snapshot of a finite sequence
//!
//! Elements are handed out as `Rc<T>`, so repeated reads of one index
//! return the same allocation. For a sequence shared between threads see
//! `lazyrel-concurrency`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod iter;
pub mod sequence;

pub use iter::Iter;
pub use sequence::{LazySequence, LocalSlots};
