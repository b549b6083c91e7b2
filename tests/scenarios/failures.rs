//! Producer failure scenarios

use crate::common::*;

#[test]
fn test_error_propagates_unmodified() {
    let seq = LazySequence::new(TryIterProducer::finite(failing_at(5, 2).into_iter()));
    let err = seq.get(3).unwrap_err();
    assert_eq!(err, LazyError::Producer(Corrupt(2)));
    assert_eq!(err.to_string(), "corrupt record at 2");
}

#[test]
fn test_no_partial_caching() {
    let seq = LazySequence::new(TryIterProducer::finite(failing_at(5, 2).into_iter()));
    assert!(seq.get(2).is_err());
    assert_eq!(seq.realized_indices(), vec![0, 1]);
    assert!(!seq.is_realized(2));
}

#[test]
fn test_iterator_yields_error_once() {
    let seq = LazySequence::new(TryIterProducer::finite(failing_at(4, 1).into_iter()));
    let mut iter = seq.iter();
    assert_eq!(*iter.next().unwrap().unwrap(), 0);
    assert_eq!(iter.next(), Some(Err(LazyError::Producer(Corrupt(1)))));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_unbounded_fallible_source() {
    let source = (0usize..).map(|i| if i == 7 { Err(Corrupt(i)) } else { Ok(i) });
    let seq = LazySequence::new(TryIterProducer::unbounded(source));
    assert_eq!(seq.len(), Err(LazyError::LengthUnknown));
    assert_eq!(*seq.get(6).unwrap(), 6);
    assert_eq!(seq.get(7), Err(LazyError::Producer(Corrupt(7))));
}

#[test]
fn test_failure_does_not_shift_later_elements() {
    let seq = LazySequence::new(TryIterProducer::finite(failing_at(5, 2).into_iter()));
    assert_eq!(seq.get(2), Err(LazyError::Producer(Corrupt(2))));

    // Elements 3 and 4 must not move down into indices 2 and 3
    for index in 2..5 {
        assert_eq!(seq.get(index), Err(LazyError::Poisoned { index: 2 }));
    }
    assert_eq!(seq.len(), Err(LazyError::Poisoned { index: 2 }));
    assert_eq!(*seq.get(0).unwrap(), 0);
    assert_eq!(*seq.get(1).unwrap(), 1);
}
