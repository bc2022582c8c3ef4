//! Engine configuration types.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Marker classes the engine puts on header cells.
///
/// Every sortable header receives `sortable_class`; headers whose column
/// is in the active sort order additionally receive `ascending_class` or
/// `descending_class`. These are the only styling hooks the engine
/// provides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Class on every header that accepts clicks.
    pub sortable_class: String,

    /// Class on headers sorted ascending.
    pub ascending_class: String,

    /// Class on headers sorted descending.
    pub descending_class: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sortable_class: "sortHeader".into(),
            ascending_class: "sortHeaderAsc".into(),
            descending_class: "sortHeaderDesc".into(),
        }
    }
}

impl EngineConfig {
    /// Create a config with the default class names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class for sortable headers.
    pub fn sortable_class(mut self, class: impl Into<String>) -> Self {
        self.sortable_class = class.into();
        self
    }

    /// Set the class for ascending headers.
    pub fn ascending_class(mut self, class: impl Into<String>) -> Self {
        self.ascending_class = class.into();
        self
    }

    /// Set the class for descending headers.
    pub fn descending_class(mut self, class: impl Into<String>) -> Self {
        self.descending_class = class.into();
        self
    }

    /// Load a config from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
