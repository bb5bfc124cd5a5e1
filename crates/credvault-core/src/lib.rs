//! # Credvault Core
//!
//! Pure primitives for Credvault: the obscuring transform, probe sequencing,
//! the open-addressed credential table and password generation.
//!
//! This crate contains no I/O. Persistence lives in `credvault-store`.
//!
//! ## Key Types
//!
//! - [`HashTable`] - Open-addressed username → password table with growth
//! - [`ProbeSequence`] - Double-hashing slot sequence for a key
//! - [`TableConfig`] - Capacity, growth threshold and lookup strategy
//!
//! ## Obscuring
//!
//! Stored passwords pass through [`obscure::encode`], a one-place letter
//! rotation. It is reversible by design and offers no confidentiality.

pub mod config;
pub mod error;
pub mod generator;
pub mod obscure;
pub mod probe;
pub mod table;

pub use config::{LookupStrategy, TableConfig, DEFAULT_MAX_LOAD_FACTOR, MIN_CAPACITY};
pub use error::{CoreError, Result};
pub use generator::{generate_password, GENERATED_LENGTH};
pub use obscure::{decode, encode};
pub use probe::{KeyHash, ProbeSequence};
pub use table::{Chain, Entry, HashTable, Placement};
