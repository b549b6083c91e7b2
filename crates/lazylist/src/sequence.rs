//! `LazySequence` and its index-keyed cache

use crate::iter::Iter;
use lazyrel_core::{Extent, LazyConfig, LazyError, LazyResult, Producer, Realizer, Slots};
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Range;
use std::rc::Rc;

/// Realized elements keyed by index
///
/// Sparse, so random-access producers can realize far-apart indices
/// without filling the gap.
#[derive(Debug)]
pub struct LocalSlots<T> {
    items: FxHashMap<usize, Rc<T>>,
}

impl<T> LocalSlots<T> {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            items: FxHashMap::default(),
        }
    }

    /// Cached element at `index`
    pub fn get(&self, index: usize) -> Option<Rc<T>> {
        self.items.get(&index).cloned()
    }

    /// Number of realized elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been realized yet
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Realized indices in ascending order
    pub fn indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.items.keys().copied().collect();
        indices.sort_unstable();
        indices
    }
}

impl<T> Default for LocalSlots<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Slots<T> for LocalSlots<T> {
    fn contains(&self, index: usize) -> bool {
        self.items.contains_key(&index)
    }

    fn insert(&mut self, index: usize, item: T) {
        self.items.insert(index, Rc::new(item));
    }
}

struct State<P: Producer> {
    realizer: Realizer<P>,
    slots: LocalSlots<P::Item>,
}

/// Lazy, memoizing list view over a producer
///
/// Reads take `&self`; the cache grows behind a `RefCell`. A producer must
/// not call back into the sequence it feeds.
///
/// # Example
///
/// ```
/// use lazyrel_core::IterProducer;
/// use lazyrel_lazylist::LazySequence;
///
/// let seq = LazySequence::new(IterProducer::finite(vec![10, 20, 30].into_iter()));
/// assert_eq!(*seq.get(1).unwrap(), 20);
/// assert!(seq.get(5).unwrap_err().is_out_of_range());
/// ```
pub struct LazySequence<P: Producer> {
    state: RefCell<State<P>>,
}

impl<P: Producer> LazySequence<P> {
    /// Wrap `producer` with the default configuration
    pub fn new(producer: P) -> Self {
        Self::with_config(producer, &LazyConfig::default())
    }

    /// Wrap `producer` with an explicit configuration
    pub fn with_config(producer: P, config: &LazyConfig) -> Self {
        Self {
            state: RefCell::new(State {
                realizer: Realizer::new(producer, config),
                slots: LocalSlots::new(),
            }),
        }
    }

    /// Element at `index`, realizing it if needed
    ///
    /// # Errors
    ///
    /// - `IndexOutOfRange` if the producer ends before `index`
    /// - `LimitExceeded` if `index` is past the configured limit
    /// - `Producer` if the producer fails; nothing is cached for that index
    /// - `Poisoned` for indices at or past an earlier sequential failure
    pub fn get(&self, index: usize) -> LazyResult<Rc<P::Item>, P::Error> {
        let mut state = self.state.borrow_mut();
        let State { realizer, slots } = &mut *state;
        if let Some(item) = slots.get(index) {
            return Ok(item);
        }
        realizer.realize(index, slots)?;
        slots.get(index).ok_or(LazyError::IndexOutOfRange { index })
    }

    /// Total element count
    ///
    /// `Exact` producers answer without realizing anything, `Finite`
    /// producers are realized fully, `Unbounded` producers fail with
    /// `LengthUnknown`.
    pub fn len(&self) -> LazyResult<usize, P::Error> {
        let mut state = self.state.borrow_mut();
        let State { realizer, slots } = &mut *state;
        realizer.len(slots)
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
    pub fn first(&self) -> LazyResult<Option<Rc<P::Item>>, P::Error> {
        match self.get(0) {
            Ok(item) => Ok(Some(item)),
            Err(LazyError::IndexOutOfRange { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Last element, if any; follows the `len` policy
    pub fn last(&self) -> LazyResult<Option<Rc<P::Item>>, P::Error> {
        match self.len()? {
            0 => Ok(None),
            len => self.get(len - 1).map(Some),
        }
    }

    /// Elements in `range`, realizing them if needed
    ///
    /// Fails with `IndexOutOfRange` for the first index past the end.
    pub fn slice(&self, range: Range<usize>) -> LazyResult<Vec<Rc<P::Item>>, P::Error> {
        range.map(|index| self.get(index)).collect()
    }

    /// Realize everything and return the elements in order
    ///
    /// # Errors
    ///
    /// `LengthUnknown` for unbounded producers.
    pub fn to_vec(&self) -> LazyResult<Vec<Rc<P::Item>>, P::Error> {
        let mut state = self.state.borrow_mut();
        let State { realizer, slots } = &mut *state;
        let len = realizer.realize_all(slots)?;
        tracing::debug!(len, "sequence fully realized");
        (0..len)
            .map(|index| slots.get(index).ok_or(LazyError::IndexOutOfRange { index }))
            .collect()
    }

    /// Iterate from index 0, reusing the cache
    pub fn iter(&self) -> Iter<'_, P> {
        Iter::new(self)
    }

    /// Number of realized elements
    pub fn realized_count(&self) -> usize {
        self.state.borrow().slots.len()
    }

    /// Whether `index` has been realized; never produces
    pub fn is_realized(&self, index: usize) -> bool {
        self.state.borrow().slots.contains(index)
    }

    /// Realized indices in ascending order
    pub fn realized_indices(&self) -> Vec<usize> {
        self.state.borrow().slots.indices()
    }

    /// Length if known without producing anything
    pub fn known_len(&self) -> Option<usize> {
        self.state.borrow().realizer.known_len()
    }

    /// Extent declared by the producer
    pub fn extent(&self) -> Extent {
        self.state.borrow().realizer.extent()
    }

    /// Number of elements the producer has yielded
    pub fn production_count(&self) -> u64 {
        self.state.borrow().realizer.produced()
    }
}

impl<'a, P: Producer> IntoIterator for &'a LazySequence<P> {
    type Item = LazyResult<Rc<P::Item>, P::Error>;
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: Producer> fmt::Debug for LazySequence<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state.try_borrow() {
            Ok(state) => f
                .debug_struct("LazySequence")
                .field("extent", &state.realizer.extent())
                .field("realized", &state.slots.len())
                .field("known_len", &state.realizer.known_len())
                .finish(),
            Err(_) => f.write_str("LazySequence { <realizing> }"),
        }
    }
}
