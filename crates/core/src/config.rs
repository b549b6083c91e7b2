//! Sequence configuration via `lazyrel.toml`
//!
//! Every lazy sequence can be built with a `LazyConfig`. The defaults need
//! no file at all; applications that want a realization limit drop a
//! `lazyrel.toml` next to their data and load it with [`LazyConfig::from_file`].

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name looked up by applications.
pub const CONFIG_FILE_NAME: &str = "lazyrel.toml";

/// Lazy sequence configuration loaded from `lazyrel.toml`.
///
/// # Example
///
/// ```toml
/// # Refuse to realize more than one million elements per sequence
/// realization_limit = 1000000
///
/// # Emit a trace event for every realized element
/// trace_realization = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LazyConfig {
    /// Maximum number of indices a single sequence may realize.
    ///
    /// Requests for `index >= limit` fail with `LimitExceeded` before the
    /// producer is invoked. Unset means unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realization_limit: Option<usize>,
    /// Emit a `trace`-level event per realized element.
    #[serde(default)]
    pub trace_realization: bool,
}

impl LazyConfig {
    /// Config with a realization limit and otherwise default settings.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            realization_limit: Some(limit),
            ..Self::default()
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# lazyrel configuration
#
# Maximum number of elements any one sequence may realize (default: unlimited).
# Forcing full realization of a large finite producer stops here with a
# LimitExceeded error instead of growing the cache without bound.
# realization_limit = 1000000

# Emit a trace-level event for every realized element (default: false)
trace_realization = false
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
