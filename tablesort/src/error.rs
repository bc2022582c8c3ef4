//! Error types

use std::path::PathBuf;

use crate::table::TableId;

/// Error returned when a message cannot be delivered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No table is attached under this id.
    #[error("Table '{0}' is not attached")]
    UnknownTable(TableId),
}

/// Error loading an [`EngineConfig`](crate::EngineConfig) from disk.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid config document.
    #[error("Invalid config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
