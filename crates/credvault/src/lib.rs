//! # Credvault
//!
//! The unified API for Credvault, a minimal single-user credential store.
//!
//! ## Overview
//!
//! Credvault maps usernames to one or more passwords:
//!
//! - **Table**: an open-addressed hash table with double-hashing probes that
//!   doubles when its load factor passes 0.5
//! - **Obscuring**: stored passwords are letter-shifted. This is not
//!   encryption and gives no confidentiality
//! - **Sidecar**: every insert is appended to the user's append-only record,
//!   which lookups read back
//!
//! ## Known Inconsistencies
//!
//! - Lookups examine only a key's primary slot unless
//!   [`LookupStrategy::FullProbe`] is configured, so an entry displaced by a
//!   collision can be invisible until the table grows.
//! - The sidecar is a superset history. Deleted passwords stay in it and are
//!   returned by [`Vault::find_all`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use credvault::{Vault, VaultConfig};
//!
//! let mut vault = Vault::open(VaultConfig::default()).unwrap();
//!
//! vault.insert("alice", "Cat123!").unwrap();
//! assert!(vault.verify("alice", "Cat123!"));
//!
//! let generated = vault
//!     .insert_generated("alice", &mut rand::thread_rng())
//!     .unwrap();
//!
//! for password in vault.find_all("alice").unwrap() {
//!     println!("{}", password);
//! }
//!
//! vault.delete("alice", &generated);
//! ```
//!
//! ## Re-exports
//!
//! - `credvault::core` - Table, probing, transform, generator
//! - `credvault::store` - Sidecar trait and backends

pub mod error;
pub mod vault;

// Re-export component crates
pub use credvault_core as core;
pub use credvault_store as store;

// Re-export main types for convenience
pub use error::{Result, VaultError};
pub use vault::{Passwords, Vault, VaultConfig};

// Re-export commonly used component types
pub use credvault_core::{HashTable, LookupStrategy, Placement, TableConfig};
pub use credvault_store::{FileSidecar, FileSidecarConfig, MemorySidecar, Sidecar, SqliteSidecar};
