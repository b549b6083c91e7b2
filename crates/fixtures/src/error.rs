//! Fixture error types

use crate::intids::IntId;
use thiserror::Error;

/// Errors raised by the site fixture
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixtureError {
    /// No object is registered under this int id
    #[error("unknown int id: {0}")]
    UnknownIntId(IntId),

    /// An object with this id is already in the site
    #[error("duplicate object id: {0}")]
    DuplicateObject(String),
}
