//! Database schema migrations for SQLite.
//!
//! A simple versioned migration system. Each migration transforms the schema
//! from version N to N+1 and is recorded in the `schema_meta` table. All
//! pending migrations run inside a single transaction at open time, so a
//! failure leaves the file at its previous version rather than half-migrated.

use rusqlite::Connection;

use crate::error::{Result, StoreError};

/// Current schema version.
pub const CURRENT_VERSION: u32 = 1;

/// Initialize or migrate the database schema.
///
/// This function is idempotent - it can be called multiple times safely.
pub fn migrate(conn: &mut Connection) -> Result<()> {
    // Version marker table. If even this fails, the file is not usable as a
    // database at all.
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_meta (
            version INTEGER PRIMARY KEY,
            applied_at INTEGER NOT NULL
        )",
        [],
    )
    .map_err(|e| StoreError::Unopenable(e.to_string()))?;

    let current = schema_version(conn)?;

    if current > CURRENT_VERSION {
        // Written by a newer release. Touching it could corrupt state this
        // code does not understand.
        return Err(StoreError::MigrationFailed(format!(
            "database schema version {} is newer than supported version {}",
            current, CURRENT_VERSION
        )));
    }

    if current < CURRENT_VERSION {
        tracing::debug!(from = current, to = CURRENT_VERSION, "migrating schema");
        let tx = conn.transaction()?;

        for version in (current + 1)..=CURRENT_VERSION {
            apply_migration(&tx, version)?;

            tx.execute(
                "INSERT INTO schema_meta (version, applied_at) VALUES (?1, ?2)",
                rusqlite::params![version, now_millis()],
            )?;
        }

        tx.commit()?;
    }

    Ok(())
}

/// Read the schema version currently recorded on disk (0 if fresh).
pub fn schema_version(conn: &Connection) -> Result<u32> {
    let version: u32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_meta",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

/// Apply a specific migration version.
fn apply_migration(conn: &Connection, version: u32) -> Result<()> {
    match version {
        1 => apply_v1(conn),
        _ => Err(StoreError::MigrationFailed(format!(
            "unknown migration version: {}",
            version
        ))),
    }
}

/// Migration v1: Initial schema.
fn apply_v1(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- Entries table: one row per saved reading-list item
        CREATE TABLE entries (
            id BLOB PRIMARY KEY,           -- 32 bytes, blake3 digest of canonical url+title+excerpt
            url TEXT NOT NULL,             -- canonicalized absolute URL
            title TEXT NOT NULL,           -- may be empty
            excerpt TEXT NOT NULL,         -- may be empty
            added_at INTEGER NOT NULL,     -- Unix ms, set once at insert
            read_at INTEGER,               -- Unix ms, NULL = unread
            archived INTEGER NOT NULL DEFAULT 0
        );

        -- Indexes for common queries
        CREATE INDEX idx_entries_added_at ON entries(added_at);
        CREATE INDEX idx_entries_read_at ON entries(read_at);
        CREATE INDEX idx_entries_archived ON entries(archived);
        "#,
    )?;

    Ok(())
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}
