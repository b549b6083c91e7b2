//! Realization state machine
//!
//! A [`Realizer`] owns a producer and decides what has to be produced to
//! satisfy a read. It does not own the cache: elements are written through
//! a [`Slots`] implementation, so the single-threaded and the concurrent
//! sequence share this logic while keeping their own cache types.
//!
//! ## Per-index lifecycle
//!
//! ```text
//! unrealized ──(first access that needs it)──> realized
//! ```
//!
//! The transition happens once and never reverses. A failed production
//! leaves the index unrealized.
//!
//! ## Failures
//!
//! - Random: nothing is recorded; the next read asks the producer again
//! - Sequential: the producer has already moved past the failed element, so
//!   the sequence stops there. Indices below it are still served from the
//!   cache, indices at or past it fail with `Poisoned`
//!
//! ## Length policy
//!
//! - `Exact(n)`: `n`, without producing anything
//! - `Finite`: realize everything, then count
//! - `Unbounded`: `LengthUnknown`, always

use crate::config::LazyConfig;
use crate::error::{LazyError, LazyResult};
use crate::producer::{Access, Extent, Producer};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Cache-write seam used by the realizer
pub trait Slots<T> {
    /// Whether `index` is already realized
    fn contains(&self, index: usize) -> bool;

    /// Store the element realized at `index`
    fn insert(&mut self, index: usize, item: T);
}

impl<T> Slots<T> for BTreeMap<usize, T> {
    fn contains(&self, index: usize) -> bool {
        self.contains_key(&index)
    }

    fn insert(&mut self, index: usize, item: T) {
        BTreeMap::insert(self, index, item);
    }
}

/// Producer plus the bookkeeping needed to realize indices on demand
#[derive(Debug)]
pub struct Realizer<P> {
    producer: P,
    extent: Extent,
    access: Access,
    /// Next index a sequential producer will yield
    cursor: usize,
    /// Length discovered when the producer reported exhaustion
    end: Option<usize>,
    /// Index where a sequential producer failed
    failed_at: Option<usize>,
    limit: Option<usize>,
    trace_realization: bool,
    produced: u64,
}

impl<P: Producer> Realizer<P> {
    /// Take ownership of `producer`, reading its declarations once
    pub fn new(producer: P, config: &LazyConfig) -> Self {
        let extent = producer.extent();
        let access = producer.access();
        Self {
            producer,
            extent,
            access,
            cursor: 0,
            end: None,
            failed_at: None,
            limit: config.realization_limit,
            trace_realization: config.trace_realization,
            produced: 0,
        }
    }

    /// Declared extent
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Declared access mode
    pub fn access(&self) -> Access {
        self.access
    }

    /// Length if known without producing anything
    ///
    /// The discovered end wins over a declared exact length.
    pub fn known_len(&self) -> Option<usize> {
        self.end.or_else(|| self.extent.exact())
    }

    /// Index where a sequential producer failed, if it has
    pub fn failed_at(&self) -> Option<usize> {
        self.failed_at
    }

    /// Number of elements the producer has yielded successfully
    pub fn produced(&self) -> u64 {
        self.produced
    }

    /// Ensure `index` is realized in `slots`
    ///
    /// Sequential producers realize (and store) every index up to and
    /// including `index`. Random producers realize only `index`.
    pub fn realize<S>(&mut self, index: usize, slots: &mut S) -> LazyResult<(), P::Error>
    where
        S: Slots<P::Item>,
    {
        if slots.contains(index) {
            return Ok(());
        }
        self.check_bounds(index)?;

        match self.access {
            Access::Sequential => {
                self.check_poisoned(index)?;
                while self.cursor <= index {
                    if !self.step(slots)? {
                        return Err(LazyError::IndexOutOfRange { index });
                    }
                }
                Ok(())
            }
            Access::Random => match self.producer.produce_at(index) {
                None => Err(LazyError::IndexOutOfRange { index }),
                Some(Err(e)) => Err(self.failed(index, e)),
                Some(Ok(item)) => {
                    self.store(index, item, slots);
                    Ok(())
                }
            },
        }
    }

    /// Realize every element and return the length
    ///
    /// # Errors
    ///
    /// `LengthUnknown` for unbounded producers, `LimitExceeded` if the
    /// producer has not ended by the configured limit, `Poisoned` if a
    /// sequential producer failed before its end.
    pub fn realize_all<S>(&mut self, slots: &mut S) -> LazyResult<usize, P::Error>
    where
        S: Slots<P::Item>,
    {
        if !self.extent.is_finite() {
            return Err(LazyError::LengthUnknown);
        }

        match self.access {
            Access::Sequential => loop {
                if let Some(len) = self.known_len() {
                    if self.cursor >= len {
                        return Ok(len);
                    }
                }
                self.check_poisoned(self.cursor)?;
                self.check_limit(self.cursor)?;
                self.step(slots)?;
            },
            Access::Random => {
                let mut index = 0;
                loop {
                    if let Some(len) = self.known_len() {
                        if index >= len {
                            return Ok(len);
                        }
                    }
                    if !slots.contains(index) {
                        self.check_limit(index)?;
                        match self.producer.produce_at(index) {
                            None => {
                                self.exhausted(index);
                                return Ok(index);
                            }
                            Some(Err(e)) => return Err(self.failed(index, e)),
                            Some(Ok(item)) => self.store(index, item, slots),
                        }
                    }
                    index += 1;
                }
            }
        }
    }

    /// Total element count, following the length policy
    pub fn len<S>(&mut self, slots: &mut S) -> LazyResult<usize, P::Error>
    where
        S: Slots<P::Item>,
    {
        match self.extent {
            Extent::Unbounded => Err(LazyError::LengthUnknown),
            Extent::Exact(_) | Extent::Finite => match self.known_len() {
                Some(len) => Ok(len),
                None => self.realize_all(slots),
            },
        }
    }

    fn check_bounds(&self, index: usize) -> LazyResult<(), P::Error> {
        if let Some(len) = self.known_len() {
            if index >= len {
                return Err(LazyError::IndexOutOfRange { index });
            }
        }
        self.check_limit(index)
    }

    fn check_poisoned(&self, index: usize) -> LazyResult<(), P::Error> {
        match self.failed_at {
            Some(failed) if index >= failed => Err(LazyError::Poisoned { index: failed }),
            _ => Ok(()),
        }
    }

    fn check_limit(&self, index: usize) -> LazyResult<(), P::Error> {
        match self.limit {
            Some(limit) if index >= limit => Err(LazyError::LimitExceeded { limit }),
            _ => Ok(()),
        }
    }

    /// Pull one element from a sequential producer
    ///
    /// Returns `Ok(false)` on exhaustion.
    fn step<S>(&mut self, slots: &mut S) -> LazyResult<bool, P::Error>
    where
        S: Slots<P::Item>,
    {
        let index = self.cursor;
        match self.producer.produce_next() {
            None => {
                self.exhausted(index);
                Ok(false)
            }
            Some(Err(e)) => {
                self.failed_at = Some(index);
                Err(self.failed(index, e))
            }
            Some(Ok(item)) => {
                self.store(index, item, slots);
                self.cursor += 1;
                Ok(true)
            }
        }
    }

    fn store<S>(&mut self, index: usize, item: P::Item, slots: &mut S)
    where
        S: Slots<P::Item>,
    {
        slots.insert(index, item);
        self.produced += 1;
        if self.trace_realization {
            trace!(index, "realized element");
        }
    }

    fn exhausted(&mut self, len: usize) {
        self.end = Some(len);
        debug!(len, "producer exhausted");
    }

    fn failed(&self, index: usize, error: P::Error) -> LazyError<P::Error> {
        debug!(index, error = %error, "producer failed");
        LazyError::Producer(error)
    }
}
