//! Database schema migrations for the SQLite sidecar.
//!
//! We use a simple versioned migration system. Each migration is a SQL string
//! that transforms the schema from version N to N+1.

use rusqlite::Connection;

use crate::error::{Result, SidecarError};

/// Current schema version.
pub const CURRENT_VERSION: u32 = 1;

/// Initialize or migrate the database schema.
///
/// Idempotent: it can be called multiple times safely.
pub fn migrate(conn: &mut Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at INTEGER NOT NULL
        )",
        [],
    )?;

    let current: u32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    if current < CURRENT_VERSION {
        let tx = conn.transaction()?;

        for version in (current + 1)..=CURRENT_VERSION {
            apply_migration(&tx, version)?;

            tx.execute(
                "INSERT INTO schema_migrations (version, applied_at) VALUES (?1, ?2)",
                rusqlite::params![version, crate::now_millis()],
            )?;
        }

        tx.commit()?;
    }

    Ok(())
}

/// Apply a specific migration version.
fn apply_migration(conn: &Connection, version: u32) -> Result<()> {
    match version {
        1 => apply_v1(conn),
        _ => Err(SidecarError::Migration(format!(
            "unknown migration version: {}",
            version
        ))),
    }
}

/// Migration v1: append-only record log.
fn apply_v1(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- One row per appended record; rows are never updated or deleted
        CREATE TABLE sidecar_records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,  -- append order
            key TEXT NOT NULL,                     -- username
            record TEXT NOT NULL,                  -- transformed password
            appended_at INTEGER NOT NULL           -- local time (Unix ms)
        );

        CREATE INDEX idx_sidecar_records_key ON sidecar_records(key, id);
        "#,
    )?;

    Ok(())
}
