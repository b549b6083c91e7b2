//! Minimal content object

use std::fmt;

/// Content object with nothing but an id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Demo {
    id: String,
}

impl Demo {
    /// Create an object with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Object id
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Demo {}>", self.id)
    }
}
