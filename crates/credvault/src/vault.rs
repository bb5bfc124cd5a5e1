//! The Vault: unified API for Credvault.
//!
//! The Vault binds the in-memory table to a sidecar and is the surface an
//! interactive front end calls into.

use std::iter::FusedIterator;
use std::vec;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use credvault_core::{decode, encode, generate_password, HashTable, TableConfig};
use credvault_store::{check_key, check_record, FileSidecar, FileSidecarConfig, Sidecar};

use crate::error::{Result, VaultError};

/// Configuration for the Vault.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Table sizing, growth and lookup strategy.
    pub table: TableConfig,
    /// Where [`Vault::open`] keeps its per-user files.
    pub sidecar: FileSidecarConfig,
}

/// The main Vault struct.
///
/// Provides a unified API for:
/// - Storing a password, given or generated
/// - Listing a user's passwords (table and sidecar history)
/// - Checking a password
/// - Deleting a password from the table
///
/// Everything is synchronous and single-threaded.
pub struct Vault<S: Sidecar> {
    table: HashTable,
    sidecar: S,
    config: VaultConfig,
}

impl Vault<FileSidecar> {
    /// Create a vault backed by per-user files as described in `config`.
    pub fn open(config: VaultConfig) -> Result<Self> {
        let sidecar = FileSidecar::create(config.sidecar.clone())?;
        Self::new(sidecar, config)
    }
}

impl<S: Sidecar> Vault<S> {
    /// Create a new vault over `sidecar`.
    pub fn new(sidecar: S, config: VaultConfig) -> Result<Self> {
        let table = HashTable::with_config(config.table.clone())?;
        Ok(Self {
            table,
            sidecar,
            config,
        })
    }

    /// The in-memory table.
    pub fn table(&self) -> &HashTable {
        &self.table
    }

    /// The sidecar backend.
    pub fn sidecar(&self) -> &S {
        &self.sidecar
    }

    /// Mutable access to the sidecar backend.
    pub fn sidecar_mut(&mut self) -> &mut S {
        &mut self.sidecar
    }

    /// The vault's configuration.
    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Write Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Store `password` for `username` and append it to the sidecar.
    ///
    /// The table is updated first. If the sidecar append then fails the
    /// entry stays in the table and the error is returned.
    pub fn insert(&mut self, username: &str, password: &str) -> Result<()> {
        let record = encode(password);
        check_key(username)?;
        check_record(username, &record)?;

        let placement = self.table.insert(username, password)?;
        debug!(
            username,
            slot = placement.slot,
            attempts = placement.attempts,
            grew = placement.grew,
            "stored password"
        );

        self.sidecar.append(username, &record).map_err(|e| {
            warn!(username, error = %e, "sidecar append failed; entry kept in memory");
            VaultError::from(e)
        })
    }

    /// Generate a password with `rng`, store it for `username`, and return it.
    pub fn insert_generated<R: Rng + ?Sized>(
        &mut self,
        username: &str,
        rng: &mut R,
    ) -> Result<String> {
        let password = generate_password(rng);
        self.insert(username, &password)?;
        Ok(password)
    }

    /// Delete one stored `password` for `username` from the table.
    ///
    /// Returns `false` if no matching entry is visible. The sidecar history
    /// is left untouched either way.
    pub fn delete(&mut self, username: &str, password: &str) -> bool {
        self.table.delete(username, password)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Every password known for `username`: table matches first, then the
    /// whole sidecar history.
    ///
    /// Sidecar records are included whether or not the table still holds
    /// them, so deleted passwords reappear here. Each call re-reads the
    /// sidecar.
    pub fn find_all(&self, username: &str) -> Result<Passwords> {
        let in_memory = self
            .table
            .matches(username)
            .map(|e| e.obscured().to_owned())
            .collect();

        let recorded = self.sidecar.read(username).map_err(|e| {
            warn!(username, error = %e, "sidecar read failed");
            VaultError::from(e)
        })?;

        Ok(Passwords::new(in_memory, recorded))
    }

    /// True if the table holds `password` for `username`.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.table.verify(username, password)
    }
}

/// Passwords returned by [`Vault::find_all`], decoded as they are yielded.
#[derive(Debug, Clone)]
pub struct Passwords {
    in_memory: vec::IntoIter<String>,
    recorded: vec::IntoIter<String>,
}

impl Passwords {
    fn new(in_memory: Vec<String>, recorded: Vec<String>) -> Self {
        Self {
            in_memory: in_memory.into_iter(),
            recorded: recorded.into_iter(),
        }
    }

    /// Passwords still to come from the table.
    pub fn remaining_in_memory(&self) -> usize {
        self.in_memory.len()
    }

    /// Passwords still to come from the sidecar.
    pub fn remaining_recorded(&self) -> usize {
        self.recorded.len()
    }
}

impl Iterator for Passwords {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.in_memory
            .next()
            .or_else(|| self.recorded.next())
            .map(|obscured| decode(&obscured))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.in_memory.len() + self.recorded.len();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Passwords {}

impl FusedIterator for Passwords {}
