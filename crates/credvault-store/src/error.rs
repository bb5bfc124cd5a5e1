//! Error types for the sidecar module.

use thiserror::Error;

/// Errors that can occur during sidecar operations.
#[derive(Debug, Error)]
pub enum SidecarError {
    /// The record for a key could not be opened, read or written.
    #[error("sidecar record for {key:?} unavailable: {source}")]
    ResourceUnavailable {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// Key cannot address a record (empty, path-like, or containing NUL).
    #[error("invalid sidecar key: {0:?}")]
    InvalidKey(String),

    /// Record would break the one-record-per-line layout.
    #[error("invalid record for {0:?}: records may not contain line breaks")]
    InvalidRecord(String),
}

impl SidecarError {
    pub(crate) fn unavailable(key: &str, source: std::io::Error) -> Self {
        Self::ResourceUnavailable {
            key: key.to_owned(),
            source,
        }
    }
}

/// Result type for sidecar operations.
pub type Result<T> = std::result::Result<T, SidecarError>;
