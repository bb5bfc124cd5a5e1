//! In-memory implementation of the Sidecar trait.
//!
//! This is primarily for testing. It has the same semantics as the file
//! backend but keeps everything in memory with no persistence.

use std::collections::HashMap;
use std::io;

use crate::error::{Result, SidecarError};
use crate::traits::{check_key, check_record, Sidecar};

/// In-memory sidecar.
///
/// All data is lost when the sidecar is dropped. Can be switched into a
/// failing mode to exercise error paths.
#[derive(Debug, Default, Clone)]
pub struct MemorySidecar {
    records: HashMap<String, Vec<String>>,
    failing: bool,
}

impl MemorySidecar {
    /// Create a new empty sidecar.
    pub fn new() -> Self {
        Self::default()
    }

    /// When `failing` is set, every append and read returns
    /// [`SidecarError::ResourceUnavailable`].
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    /// Records for `key` without going through the failure switch.
    pub fn records(&self, key: &str) -> &[String] {
        self.records.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of keys with at least one record.
    pub fn key_count(&self) -> usize {
        self.records.len()
    }

    fn check_available(&self, key: &str) -> Result<()> {
        if self.failing {
            return Err(SidecarError::unavailable(
                key,
                io::Error::other("memory sidecar is set to fail"),
            ));
        }
        Ok(())
    }
}

impl Sidecar for MemorySidecar {
    fn append(&mut self, key: &str, record: &str) -> Result<()> {
        check_key(key)?;
        check_record(key, record)?;
        self.check_available(key)?;
        self.records
            .entry(key.to_owned())
            .or_default()
            .push(record.to_owned());
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Vec<String>> {
        check_key(key)?;
        self.check_available(key)?;
        Ok(self.records(key).to_vec())
    }
}
