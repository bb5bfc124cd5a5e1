//! # Credvault Store
//!
//! Durability sidecar for Credvault. Provides a trait-based interface for
//! per-user append-only records with file, SQLite and in-memory
//! implementations.
//!
//! ## Overview
//!
//! Every password stored in the table is also appended, in transformed form,
//! to its owner's sidecar record. Lookups read the record back and merge it
//! with what the table holds. The sidecar is never reconciled with the table:
//! deletes do not touch it, and nothing is loaded from it at startup.
//!
//! ## Key Types
//!
//! - [`Sidecar`] - The trait for all sidecar operations
//! - [`FileSidecar`] - One text file per user, one record per line
//! - [`SqliteSidecar`] - All users in one SQLite database
//! - [`MemorySidecar`] - In-memory records for tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use credvault_store::{FileSidecar, Sidecar};
//!
//! let mut sidecar = FileSidecar::open("vault").unwrap();
//! sidecar.append("alice", "Dbu123!").unwrap();
//! assert_eq!(sidecar.read("alice").unwrap(), vec!["Dbu123!"]);
//! ```

pub mod error;
pub mod file;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, SidecarError};
pub use file::{FileSidecar, FileSidecarConfig};
pub use memory::MemorySidecar;
pub use sqlite::SqliteSidecar;
pub use traits::{check_key, check_record, Sidecar};

/// Get current time in milliseconds.
pub(crate) fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
