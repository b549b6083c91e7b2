//! Configuration scenarios

use crate::common::*;
use lazyrel::CONFIG_FILE_NAME;
use tempfile::TempDir;

#[test]
fn test_limit_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "realization_limit = 4\n").unwrap();

    let config = LazyConfig::from_file(&path).unwrap();
    let seq = LazySequence::with_config(FnProducer::unbounded(|i| i), &config);

    assert_eq!(*seq.get(3).unwrap(), 3);
    assert_eq!(seq.get(4), Err(LazyError::LimitExceeded { limit: 4 }));
    assert_eq!(seq.production_count(), 1);
}

#[test]
fn test_limit_bounds_full_realization() {
    let config = LazyConfig::with_limit(10);
    let seq = LazySequence::with_config(
        IterProducer::finite((0..1_000).filter(|n| n % 2 == 0)),
        &config,
    );
    assert_eq!(seq.len(), Err(LazyError::LimitExceeded { limit: 10 }));
    assert_eq!(seq.realized_count(), 10);
}

#[test]
fn test_default_file_gives_default_behavior() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    LazyConfig::write_default_if_missing(&path).unwrap();

    let config = LazyConfig::from_file(&path).unwrap();
    assert_eq!(config, LazyConfig::default());

    let seq = LazySequence::with_config(tens(), &config);
    assert_eq!(seq.len(), Ok(3));
}

#[test]
fn test_trace_realization_does_not_change_results() {
    lazyrel_fixtures::init_test_tracing();
    let config = LazyConfig {
        trace_realization: true,
        ..LazyConfig::default()
    };
    let seq = LazySequence::with_config(tens(), &config);
    let all: Vec<i32> = seq.iter().map(|v| *v.unwrap()).collect();
    assert_eq!(all, vec![10, 20, 30]);
}
