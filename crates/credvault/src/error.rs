//! Error types for the Vault.

use credvault_core::CoreError;
use credvault_store::SidecarError;
use thiserror::Error;

/// Errors that can occur during Vault operations.
///
/// None of these are fatal; the caller decides whether to retry or report.
/// A missing password on delete is not an error: `delete` returns `false`.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Table error, e.g. a degenerate probe sequence.
    #[error("table error: {0}")]
    Table(#[from] CoreError),

    /// Sidecar error.
    #[error("sidecar error: {0}")]
    Sidecar(#[from] SidecarError),
}

impl VaultError {
    /// True if the sidecar record could not be opened, read or written.
    pub fn is_resource_unavailable(&self) -> bool {
        matches!(
            self,
            VaultError::Sidecar(SidecarError::ResourceUnavailable { .. })
                | VaultError::Sidecar(SidecarError::Database(_))
        )
    }

    /// True if the insert failed because the key cannot be probed further.
    pub fn is_degenerate_probe(&self) -> bool {
        matches!(self, VaultError::Table(CoreError::DegenerateProbe { .. }))
    }
}

/// Result type for Vault operations.
pub type Result<T> = std::result::Result<T, VaultError>;
