//! Error types for lazy sequences
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//! Producer failures are carried unmodified inside `LazyError::Producer`.

use std::convert::Infallible;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for lazy sequence operations
pub type LazyResult<T, E = Infallible> = std::result::Result<T, LazyError<E>>;

/// Errors raised while reading from a lazy sequence
///
/// `E` is the producer's own error type. Infallible producers use the
/// default, `Infallible`, so the `Producer` variant cannot be constructed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LazyError<E = Infallible> {
    /// The producer was exhausted before reaching the requested index
    #[error("index {index} out of range")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
    },

    /// Length or full materialization requested from an unbounded producer
    #[error("length unknown: producer has not declared itself finite")]
    LengthUnknown,

    /// The configured realization limit would be exceeded
    #[error("realization limit of {limit} elements exceeded")]
    LimitExceeded {
        /// Configured limit
        limit: usize,
    },

    /// A sequential producer failed at `index` earlier; nothing at or past
    /// it can be produced any more
    #[error("producer failed at index {index}; later elements are unavailable")]
    Poisoned {
        /// Index whose production failed
        index: usize,
    },

    /// The producer failed while producing an element
    #[error(transparent)]
    Producer(E),
}

impl<E> LazyError<E> {
    /// Whether this error reports an index past the end of the sequence
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, LazyError::IndexOutOfRange { .. })
    }

    /// Return the producer error, if this is one
    pub fn into_producer_error(self) -> Option<E> {
        match self {
            LazyError::Producer(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors raised while loading or saving `lazyrel.toml`
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or written
    #[error("failed to access config file '{}': {source}", path.display())]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The config file is not valid TOML for `LazyConfig`
    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        /// File that was being parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// The config could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
