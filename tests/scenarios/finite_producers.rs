//! Finite producer scenarios

use crate::common::*;
use std::rc::Rc;

#[test]
fn test_tens_scenario() {
    let seq = LazySequence::new(tens());

    let first = seq.get(1).unwrap();
    assert_eq!(*first, 20);

    // Cache hit: same allocation, no further production
    let second = seq.get(1).unwrap();
    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(seq.production_count(), 2);

    assert_eq!(seq.get(5), Err(LazyError::IndexOutOfRange { index: 5 }));

    let eager: Vec<i32> = seq.to_vec().unwrap().iter().map(|v| **v).collect();
    assert_eq!(eager, vec![10, 20, 30]);
}

#[test]
fn test_exact_length_answered_without_realizing() {
    let seq = LazySequence::new(tens());
    assert_eq!(seq.extent(), Extent::Exact(3));
    assert_eq!(seq.len(), Ok(3));
    assert_eq!(seq.realized_count(), 0);
}

#[test]
fn test_finite_length_forces_realization() {
    let seq = LazySequence::new(IterProducer::finite(
        "the quick brown fox".split(' ').filter(|w| w.len() > 3),
    ));
    assert_eq!(seq.extent(), Extent::Finite);
    assert_eq!(seq.known_len(), None);
    assert_eq!(seq.len(), Ok(2));
    assert_eq!(seq.known_len(), Some(2));
    assert_eq!(seq.realized_count(), 2);
}

#[test]
fn test_to_vec_matches_indexed_reads() {
    let seq = LazySequence::new(VecProducer::new(vec!["a", "b", "c", "d"]));
    let len = seq.len().unwrap();
    let by_index: Vec<&str> = (0..len).map(|i| *seq.get(i).unwrap()).collect();
    let eager: Vec<&str> = seq.to_vec().unwrap().iter().map(|v| **v).collect();
    assert_eq!(by_index, eager);
}

#[test]
fn test_iteration_twice_same_values() {
    let seq = LazySequence::new(tens());
    let once: Vec<i32> = seq.iter().map(|v| *v.unwrap()).collect();
    let twice: Vec<i32> = seq.iter().map(|v| *v.unwrap()).collect();
    assert_eq!(once, twice);
    assert_eq!(seq.production_count(), 3);
}

#[test]
fn test_mapped_producer() {
    let seq = LazySequence::new(tens().map_items(|n| format!("#{}", n)));
    assert_eq!(seq.get(2).unwrap().as_str(), "#30");
    assert_eq!(seq.len(), Ok(3));
}
