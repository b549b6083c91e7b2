//! On-demand element sources
//!
//! A [`Producer`] yields the elements a lazy sequence realizes. Every
//! producer declares two things up front:
//! - [`Extent`]: whether it is finite, and if so whether its length is known
//! - [`Access`]: whether elements come out in order or by direct index
//!
//! The adapters in this module cover the common cases:
//! - `IterProducer`: any infallible iterator
//! - `TryIterProducer`: an iterator of `Result`s
//! - `VecProducer`: random access over an owned vector
//! - `FnProducer`: random access from an index function
//! - `MapProducer`: applies a function to another producer's items

use std::convert::Infallible;
use std::error::Error;
use std::fmt;

/// Finiteness declared by a producer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// Finite with a known element count
    Exact(usize),
    /// Finite, count discovered on exhaustion
    Finite,
    /// Unknown or infinite
    Unbounded,
}

impl Extent {
    /// Whether the producer promised to end
    pub fn is_finite(&self) -> bool {
        !matches!(self, Extent::Unbounded)
    }

    /// The declared element count, if known
    pub fn exact(&self) -> Option<usize> {
        match self {
            Extent::Exact(n) => Some(*n),
            _ => None,
        }
    }
}

/// How elements can be pulled out of a producer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    /// Elements come out in index order via `produce_next`
    #[default]
    Sequential,
    /// Any index can be produced directly via `produce_at`
    Random,
}

/// A source of elements for a lazy sequence
///
/// Sequences call each index's production at most once. `Sequential`
/// producers are driven only through `produce_next`, `Random` producers
/// only through `produce_at`.
pub trait Producer {
    /// Element type
    type Item;
    /// Error raised while producing an element
    type Error: Error + 'static;

    /// Finiteness declaration; must not change over the producer's life
    fn extent(&self) -> Extent;

    /// Access mode; must not change over the producer's life
    fn access(&self) -> Access {
        Access::Sequential
    }

    /// Produce the next element in order
    ///
    /// Returns `None` once the producer is exhausted.
    fn produce_next(&mut self) -> Option<Result<Self::Item, Self::Error>>;

    /// Produce the element at `index` directly
    ///
    /// Returns `None` if `index` is past the end. Only called for `Random`
    /// producers.
    fn produce_at(&mut self, index: usize) -> Option<Result<Self::Item, Self::Error>> {
        let _ = index;
        None
    }

    /// Wrap this producer so every item passes through `f`
    fn map_items<U, F>(self, f: F) -> MapProducer<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        MapProducer::new(self, f)
    }
}

// ============================================================================
// Iterator adapters
// ============================================================================

/// Producer over an infallible iterator
#[derive(Debug, Clone)]
pub struct IterProducer<I> {
    iter: I,
    extent: Extent,
}

impl<I: Iterator> IterProducer<I> {
    /// Wrap an iterator that is known to end
    ///
    /// An exact `size_hint` is taken as the declared length.
    pub fn finite(iter: I) -> Self {
        let extent = match iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Extent::Exact(lower),
            _ => Extent::Finite,
        };
        Self { iter, extent }
    }

    /// Wrap an iterator that may never end
    pub fn unbounded(iter: I) -> Self {
        Self {
            iter,
            extent: Extent::Unbounded,
        }
    }
}

impl<I: Iterator> Producer for IterProducer<I> {
    type Item = I::Item;
    type Error = Infallible;

    fn extent(&self) -> Extent {
        self.extent
    }

    fn produce_next(&mut self) -> Option<Result<Self::Item, Self::Error>> {
        self.iter.next().map(Ok)
    }
}

/// Producer over an iterator of `Result`s
///
/// An `Err` item surfaces as a producer error at the index it occupies.
#[derive(Debug, Clone)]
pub struct TryIterProducer<I> {
    iter: I,
    extent: Extent,
}

impl<I> TryIterProducer<I> {
    /// Wrap a fallible iterator that is known to end
    pub fn finite(iter: I) -> Self {
        Self {
            iter,
            extent: Extent::Finite,
        }
    }

    /// Wrap a fallible iterator that may never end
    pub fn unbounded(iter: I) -> Self {
        Self {
            iter,
            extent: Extent::Unbounded,
        }
    }
}

impl<I, T, E> Producer for TryIterProducer<I>
where
    I: Iterator<Item = Result<T, E>>,
    E: Error + 'static,
{
    type Item = T;
    type Error = E;

    fn extent(&self) -> Extent {
        self.extent
    }

    fn produce_next(&mut self) -> Option<Result<T, E>> {
        self.iter.next()
    }
}

// ============================================================================
// Random-access adapters
// ============================================================================

/// Random-access producer over an owned vector
///
/// Each slot is moved out on its single production.
#[derive(Debug, Clone)]
pub struct VecProducer<T> {
    slots: Vec<Option<T>>,
    next: usize,
}

impl<T> VecProducer<T> {
    /// Wrap a vector
    pub fn new(items: Vec<T>) -> Self {
        Self {
            slots: items.into_iter().map(Some).collect(),
            next: 0,
        }
    }
}

impl<T> From<Vec<T>> for VecProducer<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> Producer for VecProducer<T> {
    type Item = T;
    type Error = Infallible;

    fn extent(&self) -> Extent {
        Extent::Exact(self.slots.len())
    }

    fn access(&self) -> Access {
        Access::Random
    }

    fn produce_next(&mut self) -> Option<Result<T, Infallible>> {
        let index = self.next;
        self.next += 1;
        self.produce_at(index)
    }

    fn produce_at(&mut self, index: usize) -> Option<Result<T, Infallible>> {
        self.slots.get_mut(index)?.take().map(Ok)
    }
}

/// Random-access producer computing each element from its index
#[derive(Clone)]
pub struct FnProducer<F> {
    f: F,
    extent: Extent,
    next: usize,
}

impl<F> FnProducer<F> {
    /// Index function defined for every natural number
    pub fn unbounded<T>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self {
            f,
            extent: Extent::Unbounded,
            next: 0,
        }
    }

    /// Index function defined for `0..len`
    pub fn exact<T>(len: usize, f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self {
            f,
            extent: Extent::Exact(len),
            next: 0,
        }
    }
}

impl<F> fmt::Debug for FnProducer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProducer")
            .field("extent", &self.extent)
            .finish_non_exhaustive()
    }
}

impl<F, T> Producer for FnProducer<F>
where
    F: FnMut(usize) -> T,
{
    type Item = T;
    type Error = Infallible;

    fn extent(&self) -> Extent {
        self.extent
    }

    fn access(&self) -> Access {
        Access::Random
    }

    fn produce_next(&mut self) -> Option<Result<T, Infallible>> {
        let index = self.next;
        self.next += 1;
        self.produce_at(index)
    }

    fn produce_at(&mut self, index: usize) -> Option<Result<T, Infallible>> {
        match self.extent.exact() {
            Some(len) if index >= len => None,
            _ => Some(Ok((self.f)(index))),
        }
    }
}

// ============================================================================
// Combinators
// ============================================================================

/// Producer applying a function to another producer's items
///
/// Extent and access mode are those of the inner producer.
#[derive(Clone)]
pub struct MapProducer<P, F> {
    inner: P,
    f: F,
}

impl<P, F> MapProducer<P, F> {
    /// Map `inner`'s items through `f`
    pub fn new(inner: P, f: F) -> Self {
        Self { inner, f }
    }
}

impl<P: fmt::Debug, F> fmt::Debug for MapProducer<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapProducer")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<P, F, U> Producer for MapProducer<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> U,
{
    type Item = U;
    type Error = P::Error;

    fn extent(&self) -> Extent {
        self.inner.extent()
    }

    fn access(&self) -> Access {
        self.inner.access()
    }

    fn produce_next(&mut self) -> Option<Result<U, P::Error>> {
        let f = &mut self.f;
        self.inner.produce_next().map(|r| r.map(f))
    }

    fn produce_at(&mut self, index: usize) -> Option<Result<U, P::Error>> {
        let f = &mut self.f;
        self.inner.produce_at(index).map(|r| r.map(f))
    }
}
