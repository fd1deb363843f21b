//! SQLite storage adapter: the single owner of the on-disk file.
//!
//! Uses rusqlite with bundled SQLite. The connection sits behind a mutex;
//! SQLite itself provides single-writer/multi-reader locking at the file
//! level, and no lock here outlives one transaction.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::types::{ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, ToSql, Transaction};

use pagemark_core::{Entry, EntryFilter, EntryId};

use crate::codec::{self, Row, Value, ROW_VERSION};
use crate::error::{Result, StoreError};
use crate::migration;

/// The storage engine adapter.
///
/// Owns the connection and its transaction scope. Constructed explicitly by
/// the caller via [`open`](SqliteStore::open); there is no implicit
/// singleton.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open a database at the given path.
    ///
    /// Creates the file and schema if absent. Pending migrations run here,
    /// inside their own transaction; a migration failure aborts the open and
    /// leaves the file at its previous version.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path.as_ref())
            .map_err(|e| StoreError::Unopenable(e.to_string()))?;
        Self::finish_open(&mut conn)?;
        tracing::debug!(path = %path.as_ref().display(), "opened store");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn =
            Connection::open_in_memory().map_err(|e| StoreError::Unopenable(e.to_string()))?;
        Self::finish_open(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn finish_open(conn: &mut Connection) -> Result<()> {
        migration::migrate(conn).map_err(|e| match e {
            keep @ (StoreError::MigrationFailed(_) | StoreError::Unopenable(_)) => keep,
            other => StoreError::MigrationFailed(other.to_string()),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Run a closure inside a transaction.
    ///
    /// Commits when the closure returns `Ok`, rolls back when it returns
    /// `Err`. The caller never observes a partially-applied multi-statement
    /// operation.
    pub fn run_in_transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        match f(&tx) {
            Ok(value) => {
                tx.commit()?;
                Ok(value)
            }
            Err(e) => {
                // Explicit for clarity; dropping an uncommitted transaction
                // also rolls back. The original error wins over any rollback
                // failure.
                let _ = tx.rollback();
                Err(e)
            }
        }
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Owned(rusqlite::types::Value::Null),
            Value::Integer(i) => ToSqlOutput::Owned(rusqlite::types::Value::Integer(*i)),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Value::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b)),
        })
    }
}

const ENTRY_COLUMNS: &str = "id, url, title, excerpt, added_at, read_at, archived";

/// Map a SQLite result row into the codec's tagged representation.
fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Row> {
    let mut out = Row::new(ROW_VERSION);
    out.push("id", Value::Blob(row.get("id")?));
    out.push("url", Value::Text(row.get("url")?));
    out.push("title", Value::Text(row.get("title")?));
    out.push("excerpt", Value::Text(row.get("excerpt")?));
    out.push("added_at", Value::Integer(row.get("added_at")?));
    out.push(
        "read_at",
        match row.get::<_, Option<i64>>("read_at")? {
            Some(ts) => Value::Integer(ts),
            None => Value::Null,
        },
    );
    out.push("archived", Value::Integer(row.get("archived")?));
    Ok(out)
}

/// Fetch one entry by digest. `Ok(None)` on miss, never an error.
pub fn fetch_entry(conn: &Connection, id: &EntryId) -> Result<Option<Entry>> {
    let row: Option<Row> = conn
        .query_row(
            &format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?1"),
            params![id.as_bytes().as_slice()],
            read_row,
        )
        .optional()?;

    match row {
        Some(row) => Ok(Some(codec::decode(&row)?)),
        None => Ok(None),
    }
}

/// Insert a new entry row.
///
/// The caller is responsible for having checked for an existing row with the
/// same digest inside the same transaction.
pub fn insert_entry(conn: &Connection, entry: &Entry) -> Result<()> {
    let row = codec::encode(entry);
    conn.execute(
        &format!(
            "INSERT INTO entries ({ENTRY_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
        ),
        rusqlite::params_from_iter(row.values()),
    )?;
    Ok(())
}

/// Update the mutable fields (read_at, archived) of an existing entry.
///
/// Returns false if no row with that digest exists.
pub fn update_entry(conn: &Connection, entry: &Entry) -> Result<bool> {
    let changed = conn.execute(
        "UPDATE entries SET read_at = ?2, archived = ?3 WHERE id = ?1",
        params![entry.id.as_bytes().as_slice(), entry.read_at, entry.archived],
    )?;
    Ok(changed > 0)
}

/// Hard-delete an entry row. Returns false if no row existed.
pub fn delete_entry(conn: &Connection, id: &EntryId) -> Result<bool> {
    let changed = conn.execute(
        "DELETE FROM entries WHERE id = ?1",
        params![id.as_bytes().as_slice()],
    )?;
    Ok(changed > 0)
}

/// List entries matching a filter, ordered by added_at ascending.
///
/// Ties on added_at order by digest so the sequence is deterministic.
pub fn list_entries(conn: &Connection, filter: EntryFilter) -> Result<Vec<Entry>> {
    let predicate = match filter {
        EntryFilter::All => "1 = 1",
        EntryFilter::Unread => "read_at IS NULL",
        EntryFilter::Read => "read_at IS NOT NULL",
        EntryFilter::Archived => "archived = 1",
        EntryFilter::Unarchived => "archived = 0",
    };

    let mut stmt = conn.prepare(&format!(
        "SELECT {ENTRY_COLUMNS} FROM entries WHERE {predicate} ORDER BY added_at ASC, id ASC"
    ))?;

    let rows = stmt
        .query_map([], read_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    rows.iter()
        .map(|row| codec::decode(row).map_err(StoreError::from))
        .collect()
}

/// Count live entry rows.
pub fn count_entries(conn: &Connection) -> Result<u64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
    Ok(count as u64)
}
