//! Unbounded producer scenarios

use crate::common::*;

#[test]
fn test_squares_scenario() {
    let (producer, calls) = counted_squares();
    let seq = LazySequence::new(producer);

    assert_eq!(seq.len(), Err(LazyError::LengthUnknown));
    assert_eq!(calls.get(), 0);

    assert_eq!(*seq.get(4).unwrap(), 16);
    assert_eq!(calls.get(), 5);

    let firsts: Vec<u64> = seq.iter().take(5).map(|v| *v.unwrap()).collect();
    assert_eq!(firsts, vec![0, 1, 4, 9, 16]);
    // Served from the cache
    assert_eq!(calls.get(), 5);
}

#[test]
fn test_eager_list_refused() {
    let (producer, calls) = counted_squares();
    let seq = LazySequence::new(producer);
    assert_eq!(seq.to_vec(), Err(LazyError::LengthUnknown));
    assert_eq!(seq.last(), Err(LazyError::LengthUnknown));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_random_access_far_index() {
    let seq = LazySequence::new(FnProducer::unbounded(|i: usize| i as u128 * i as u128));
    assert_eq!(*seq.get(1_000_000).unwrap(), 1_000_000_000_000);
    assert_eq!(seq.realized_indices(), vec![1_000_000]);
    assert_eq!(seq.is_empty(), Ok(false));
}

#[test]
fn test_slice_of_infinite_sequence() {
    let (producer, _) = counted_squares();
    let seq = LazySequence::new(producer);
    let window: Vec<u64> = seq.slice(10..13).unwrap().iter().map(|v| **v).collect();
    assert_eq!(window, vec![100, 121, 144]);
    assert_eq!(seq.realized_count(), 13);
}
