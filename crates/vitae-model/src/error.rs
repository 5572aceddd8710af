//! Error types for loading profiles

use thiserror::Error;

/// Result type for load operations
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while reading a profile source
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source file does not exist
    #[error("File not found at {0}")]
    NotFound(String),

    /// Source exists but could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Contents are not a well-formed profile document
    #[error("Failed to decode JSON from {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
