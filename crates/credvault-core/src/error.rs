//! Error types for Credvault Core.

use thiserror::Error;

/// Errors that can occur during table operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The key's probe sequence cannot reach an empty slot.
    ///
    /// Raised when the primary slot is occupied and either the secondary hash
    /// is a multiple of the capacity, or every slot the sequence visits is
    /// taken.
    #[error("probe sequence for {username:?} cannot reach an empty slot at capacity {capacity}")]
    DegenerateProbe { username: String, capacity: usize },

    /// Rejected table configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
