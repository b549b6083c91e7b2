//! Thread-safe lazy sequence
//!
//! # Read path
//!
//! ```text
//! 1. Look up index in the DashMap          -> hit: return Arc, done
//! 2. Lock the realizer (parking_lot Mutex)
//! 3. Recheck the DashMap under the lock    -> another thread realized it
//! 4. Realize through the producer, inserting every element it yields
//! 5. Unlock, return the cached Arc
//! ```
//!
//! Step 3 is what makes production at-most-once per index: the only writer
//! to the cache is whoever holds the realizer lock.

use dashmap::DashMap;
use lazyrel_core::{Extent, LazyConfig, LazyError, LazyResult, Producer, Realizer, Slots};
use parking_lot::Mutex;
use rustc_hash::FxHasher;
use std::fmt;
use std::hash::BuildHasherDefault;
use std::iter::FusedIterator;
use std::ops::Range;
use std::sync::Arc;

type FxBuildHasher = BuildHasherDefault<FxHasher>;
type SharedCache<T> = DashMap<usize, Arc<T>, FxBuildHasher>;

/// `Slots` view over the shared cache, used while the realizer lock is held
struct ShardedSlots<'a, T> {
    cache: &'a SharedCache<T>,
}

impl<'a, T> Slots<T> for ShardedSlots<'a, T> {
    fn contains(&self, index: usize) -> bool {
        self.cache.contains_key(&index)
    }

    fn insert(&mut self, index: usize, item: T) {
        self.cache.insert(index, Arc::new(item));
    }
}

/// Lazy, memoizing sequence that can be read from many threads
///
/// `Send + Sync` when the producer is `Send` and its items are
/// `Send + Sync`. Share it behind an `Arc`.
pub struct SharedLazySequence<P: Producer> {
    cache: SharedCache<P::Item>,
    realizer: Mutex<Realizer<P>>,
}

impl<P: Producer> SharedLazySequence<P> {
    /// Wrap `producer` with the default configuration
    pub fn new(producer: P) -> Self {
        Self::with_config(producer, &LazyConfig::default())
    }

    /// Wrap `producer` with an explicit configuration
    pub fn with_config(producer: P, config: &LazyConfig) -> Self {
        Self {
            cache: DashMap::with_hasher(FxBuildHasher::default()),
            realizer: Mutex::new(Realizer::new(producer, config)),
        }
    }

    fn cached(&self, index: usize) -> Option<Arc<P::Item>> {
        self.cache.get(&index).map(|entry| Arc::clone(entry.value()))
    }

    /// Element at `index`, realizing it if needed
    ///
    /// Concurrent calls for the same unrealized index produce it once;
    /// every caller receives the same `Arc`.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfRange` if the producer ends before `index`
    /// - `LimitExceeded` if `index` is past the configured limit
    /// - `Producer` if the producer fails; only the caller that drove the
    ///   failed production sees the error, and nothing is cached
    /// - `Poisoned` for indices at or past an earlier sequential failure
    pub fn get(&self, index: usize) -> LazyResult<Arc<P::Item>, P::Error> {
        if let Some(item) = self.cached(index) {
            return Ok(item);
        }

        let mut realizer = self.realizer.lock();
        let mut slots = ShardedSlots { cache: &self.cache };
        realizer.realize(index, &mut slots)?;
        drop(realizer);

        self.cached(index)
            .ok_or(LazyError::IndexOutOfRange { index })
    }

    /// Total element count
    ///
    /// Same policy as `LazySequence::len`: `Exact` answers directly,
    /// `Finite` realizes everything, `Unbounded` fails with `LengthUnknown`.
    pub fn len(&self) -> LazyResult<usize, P::Error> {
        let mut realizer = self.realizer.lock();
        let mut slots = ShardedSlots { cache: &self.cache };
        realizer.len(&mut slots)
    }

    /// Whether the sequence has no elements; realizes at most index 0
    pub fn is_empty(&self) -> LazyResult<bool, P::Error> {
        match self.get(0) {
            Ok(_) => Ok(false),
            Err(LazyError::IndexOutOfRange { .. }) => Ok(true),
            Err(e) => Err(e),
        }
    }

    /// First element, if any
    pub fn first(&self) -> LazyResult<Option<Arc<P::Item>>, P::Error> {
        match self.get(0) {
            Ok(item) => Ok(Some(item)),
            Err(LazyError::IndexOutOfRange { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Last element, if any; follows the `len` policy
    pub fn last(&self) -> LazyResult<Option<Arc<P::Item>>, P::Error> {
        match self.len()? {
            0 => Ok(None),
            len => self.get(len - 1).map(Some),
        }
    }

    /// Elements in `range`, realizing them if needed
    ///
    /// Fails with `IndexOutOfRange` for the first index past the end.
    pub fn slice(&self, range: Range<usize>) -> LazyResult<Vec<Arc<P::Item>>, P::Error> {
        range.map(|index| self.get(index)).collect()
    }

    /// Realize everything and return the elements in order
    ///
    /// # Errors
    ///
    /// `LengthUnknown` for unbounded producers.
    pub fn to_vec(&self) -> LazyResult<Vec<Arc<P::Item>>, P::Error> {
        let len = {
            let mut realizer = self.realizer.lock();
            let mut slots = ShardedSlots { cache: &self.cache };
            realizer.realize_all(&mut slots)?
        };
        tracing::debug!(len, "shared sequence fully realized");
        (0..len)
            .map(|index| {
                self.cached(index)
                    .ok_or(LazyError::IndexOutOfRange { index })
            })
            .collect()
    }

    /// Iterate from index 0, reusing the cache
    pub fn iter(&self) -> SharedIter<'_, P> {
        SharedIter {
            seq: self,
            next: 0,
            done: false,
        }
    }

    /// Number of realized elements
    pub fn realized_count(&self) -> usize {
        self.cache.len()
    }

    /// Whether `index` has been realized; never produces
    pub fn is_realized(&self, index: usize) -> bool {
        self.cache.contains_key(&index)
    }

    /// Realized indices in ascending order
    pub fn realized_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.cache.iter().map(|entry| *entry.key()).collect();
        indices.sort_unstable();
        indices
    }

    /// Length if known without producing anything
    pub fn known_len(&self) -> Option<usize> {
        self.realizer.lock().known_len()
    }

    /// Extent declared by the producer
    pub fn extent(&self) -> Extent {
        self.realizer.lock().extent()
    }

    /// Number of elements the producer has yielded
    pub fn production_count(&self) -> u64 {
        self.realizer.lock().produced()
    }
}

impl<P: Producer> fmt::Debug for SharedLazySequence<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedLazySequence")
            .field("realized", &self.cache.len())
            .finish_non_exhaustive()
    }
}

impl<'a, P: Producer> IntoIterator for &'a SharedLazySequence<P> {
    type Item = LazyResult<Arc<P::Item>, P::Error>;
    type IntoIter = SharedIter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a shared lazy sequence, starting at index 0
///
/// Ends at the producer's end; any other error is yielded once and ends
/// the iteration.
pub struct SharedIter<'a, P: Producer> {
    seq: &'a SharedLazySequence<P>,
    next: usize,
    done: bool,
}

impl<'a, P: Producer> Iterator for SharedIter<'a, P> {
    type Item = LazyResult<Arc<P::Item>, P::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.seq.get(self.next) {
            Ok(item) => {
                self.next += 1;
                Some(Ok(item))
            }
            Err(LazyError::IndexOutOfRange { .. }) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<'a, P: Producer> FusedIterator for SharedIter<'a, P> {}
