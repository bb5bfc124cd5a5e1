//! # Credvault Testkit
//!
//! Testing utilities for Credvault.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: fixed transform outputs and probe slots that must not drift
//! - **Generators**: Proptest strategies for usernames, passwords and workloads
//! - **Fixtures**: Vaults over in-memory or temporary-file sidecars
//!
//! ## Golden Vectors
//!
//! ```rust
//! use credvault_testkit::vectors::mismatches;
//!
//! assert!(mismatches().is_empty());
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use credvault_testkit::fixtures::TestFixture;
//!
//! let mut fixture = TestFixture::with_seed(7);
//! let password = fixture.generate("bob");
//! assert!(fixture.vault.verify("bob", &password));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{FileFixture, TestFixture, GROWTH_USERS};
pub use generators::{ops, password, username, Op};
pub use vectors::{mismatches, probe_vectors, transform_vectors, ProbeVector, TransformVector};
