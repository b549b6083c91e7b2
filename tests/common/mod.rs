//! Shared test utilities for the integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub use lazyrel::{
    Extent, FnProducer, IterProducer, LazyConfig, LazyError, LazySequence, Producer,
    SharedLazySequence, TryIterProducer, VecProducer,
};

// ============================================================================
// Producers
// ============================================================================

/// The `[10, 20, 30]` producer used throughout the scenarios
pub fn tens() -> IterProducer<std::vec::IntoIter<i32>> {
    IterProducer::finite(vec![10, 20, 30].into_iter())
}

/// Squares of the naturals, declared infinite, counting every production
pub fn counted_squares() -> (IterProducer<impl Iterator<Item = u64>>, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let producer = IterProducer::unbounded((0u64..).map(move |n| {
        counter.set(counter.get() + 1);
        n * n
    }));
    (producer, calls)
}

/// Thread-safe random-access producer counting every production
pub fn shared_counted(
    len: usize,
) -> (
    FnProducer<impl FnMut(usize) -> usize + Send>,
    Arc<AtomicUsize>,
) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let producer = FnProducer::exact(len, move |i| {
        counter.fetch_add(1, Ordering::SeqCst);
        i + 1
    });
    (producer, calls)
}

// ============================================================================
// Errors
// ============================================================================

/// Producer error used by the failure scenarios
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corrupt(pub usize);

impl fmt::Display for Corrupt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "corrupt record at {}", self.0)
    }
}

impl std::error::Error for Corrupt {}

/// Finite fallible source failing at `bad`
pub fn failing_at(len: usize, bad: usize) -> Vec<Result<usize, Corrupt>> {
    (0..len)
        .map(|i| if i == bad { Err(Corrupt(i)) } else { Ok(i) })
        .collect()
}
