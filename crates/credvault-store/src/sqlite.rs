//! SQLite implementation of the Sidecar trait.
//!
//! Keeps every key's history in one database file instead of one text file per
//! key. Rows are only ever inserted; the autoincrement id fixes append order.

use std::path::Path;

use rusqlite::{params, Connection};
use tracing::debug;

use crate::error::Result;
use crate::migration;
use crate::traits::{check_key, check_record, Sidecar};

/// SQLite-backed sidecar.
pub struct SqliteSidecar {
    conn: Connection,
}

impl SqliteSidecar {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self { conn })
    }

    /// Total number of records across all keys.
    pub fn record_count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM sidecar_records", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

impl Sidecar for SqliteSidecar {
    fn append(&mut self, key: &str, record: &str) -> Result<()> {
        check_key(key)?;
        check_record(key, record)?;
        self.conn.execute(
            "INSERT INTO sidecar_records (key, record, appended_at) VALUES (?1, ?2, ?3)",
            params![key, record, crate::now_millis()],
        )?;
        debug!(key, "appended sidecar record");
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Vec<String>> {
        check_key(key)?;
        let mut stmt = self
            .conn
            .prepare_cached("SELECT record FROM sidecar_records WHERE key = ?1 ORDER BY id")?;
        let records = stmt
            .query_map(params![key], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(records)
    }
}
