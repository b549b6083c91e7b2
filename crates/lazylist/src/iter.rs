//! Restartable iteration over a `LazySequence`

use crate::sequence::LazySequence;
use lazyrel_core::{LazyError, LazyResult, Producer};
use std::iter::FusedIterator;
use std::rc::Rc;

/// Iterator over a lazy sequence, starting at index 0
///
/// Cached indices are served from the cache; the first uncached index
/// pulls from the producer. The iterator ends at the producer's end. Any
/// other error is yielded once, after which the iterator is finished.
pub struct Iter<'a, P: Producer> {
    seq: &'a LazySequence<P>,
    next: usize,
    done: bool,
}

impl<'a, P: Producer> Iter<'a, P> {
    pub(crate) fn new(seq: &'a LazySequence<P>) -> Self {
        Self {
            seq,
            next: 0,
            done: false,
        }
    }

    /// Index the next call to `next` will read
    pub fn position(&self) -> usize {
        self.next
    }
}

impl<'a, P: Producer> Iterator for Iter<'a, P> {
    type Item = LazyResult<Rc<P::Item>, P::Error>;

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

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.seq.known_len() {
            Some(len) => {
                let remaining = len.saturating_sub(self.next);
                (0, Some(remaining))
            }
            None => (0, None),
        }
    }
}

impl<'a, P: Producer> FusedIterator for Iter<'a, P> {}
