//! Sidecar trait: the abstract interface for per-user record persistence.
//!
//! A sidecar keeps, for every key (username), an append-only list of records
//! (transformed passwords). Nothing is ever rewritten or removed, so a
//! sidecar's history is a superset of what the in-memory table holds and
//! includes passwords deleted from it.

use crate::error::{Result, SidecarError};

/// The Sidecar trait: append and read-back of per-key records.
///
/// # Design Notes
///
/// - **Append-only**: records are never truncated or deduplicated.
/// - **Scoped access**: every call acquires and releases its underlying
///   resource before returning, on success and error paths alike.
/// - **Absent is empty**: reading a key that was never written yields no
///   records. Any other failure is an error, never an empty result.
pub trait Sidecar {
    /// Append one record to `key`'s history, creating it if absent.
    fn append(&mut self, key: &str, record: &str) -> Result<()>;

    /// All records for `key`, oldest first.
    fn read(&self, key: &str) -> Result<Vec<String>>;
}

impl<S: Sidecar + ?Sized> Sidecar for Box<S> {
    fn append(&mut self, key: &str, record: &str) -> Result<()> {
        (**self).append(key, record)
    }

    fn read(&self, key: &str) -> Result<Vec<String>> {
        (**self).read(key)
    }
}

impl<S: Sidecar + ?Sized> Sidecar for &mut S {
    fn append(&mut self, key: &str, record: &str) -> Result<()> {
        (**self).append(key, record)
    }

    fn read(&self, key: &str) -> Result<Vec<String>> {
        (**self).read(key)
    }
}

/// Reject keys that cannot name a single record.
///
/// Applied by every backend so they agree on which keys are usable.
pub fn check_key(key: &str) -> Result<()> {
    let bad = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\', '\0']);
    if bad {
        return Err(SidecarError::InvalidKey(key.to_owned()));
    }
    Ok(())
}

/// Reject records that would split into several lines.
pub fn check_record(key: &str, record: &str) -> Result<()> {
    if record.contains(['\n', '\r']) {
        return Err(SidecarError::InvalidRecord(key.to_owned()));
    }
    Ok(())
}
