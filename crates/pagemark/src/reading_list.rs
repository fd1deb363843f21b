//! The reading list: CRUD and query operations over saved entries.
//!
//! Built on the digest engine (keys), the record codec (row conversion), and
//! the SQLite adapter (transactions). Uniqueness and state invariants are
//! enforced here:
//!
//! - one live row per digest; a duplicate `add` returns the existing entry
//!   unchanged
//! - `read_at`, once set, never moves backwards through `mark_read`
//! - `added_at` is immutable after creation

use std::path::Path;

use pagemark_core::{canonicalize, entry_digest, Entry, EntryFilter, EntryId};
use pagemark_store::{sqlite, SqliteStore};

use crate::error::{Error, Result};

/// The public reading-list store.
///
/// Holds the storage adapter; in-memory query results live only for the
/// duration of a call. The disk engine is the single source of truth.
pub struct ReadingList {
    store: SqliteStore,
}

impl ReadingList {
    /// Open a reading list at the given path.
    ///
    /// Creates the file and schema if absent; runs pending migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            store: SqliteStore::open(path)?,
        })
    }

    /// Open an in-memory reading list.
    ///
    /// Useful for testing; nothing survives the process.
    pub fn open_memory() -> Result<Self> {
        Ok(Self {
            store: SqliteStore::open_memory()?,
        })
    }

    /// Access the underlying storage adapter.
    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    /// Save an article. Idempotent on duplicate digest.
    ///
    /// The inputs are canonicalized, digested into the entry's id, and
    /// persisted. If an entry with the same digest already exists, it is
    /// returned unchanged and the store is not modified.
    pub fn add(&self, url: &str, title: &str, excerpt: &str) -> Result<Entry> {
        let fields = canonicalize(url, title, excerpt)?;
        let id = entry_digest(&fields.url, &fields.title, &fields.excerpt);
        let added_at = now_millis();

        let entry = self.store.run_in_transaction(|tx| {
            if let Some(existing) = sqlite::fetch_entry(tx, &id)? {
                return Ok(existing);
            }

            let entry = Entry {
                id,
                url: fields.url.clone(),
                title: fields.title.clone(),
                excerpt: fields.excerpt.clone(),
                added_at,
                read_at: None,
                archived: false,
            };
            sqlite::insert_entry(tx, &entry)?;
            tracing::debug!(id = %entry.id, url = %entry.url, "added entry");
            Ok(entry)
        })?;

        Ok(entry)
    }

    /// Get an entry by digest. `Ok(None)` on miss, never an error.
    pub fn get(&self, id: &EntryId) -> Result<Option<Entry>> {
        Ok(self
            .store
            .run_in_transaction(|tx| sqlite::fetch_entry(tx, id))?)
    }

    /// List entries matching a filter, ordered by `added_at` ascending.
    ///
    /// Each call re-reads committed state, so re-issuing `list` restarts the
    /// sequence against whatever is current.
    pub fn list(&self, filter: EntryFilter) -> Result<Vec<Entry>> {
        Ok(self
            .store
            .run_in_transaction(|tx| sqlite::list_entries(tx, filter))?)
    }

    /// Count live entries.
    pub fn count(&self) -> Result<u64> {
        Ok(self
            .store
            .run_in_transaction(|tx| sqlite::count_entries(tx))?)
    }

    /// Mark an entry read.
    ///
    /// Sets `read_at` to the current time if unset. A no-op on an
    /// already-read entry: the original timestamp is kept, so repeated calls
    /// never move `read_at` backwards.
    pub fn mark_read(&self, id: &EntryId) -> Result<Entry> {
        let now = now_millis();
        self.mutate(id, |entry| {
            if entry.read_at.is_none() {
                entry.read_at = Some(now);
            }
        })
    }

    /// Mark an entry unread, clearing `read_at`.
    pub fn mark_unread(&self, id: &EntryId) -> Result<Entry> {
        self.mutate(id, |entry| entry.read_at = None)
    }

    /// Archive an entry.
    pub fn archive(&self, id: &EntryId) -> Result<Entry> {
        self.mutate(id, |entry| entry.archived = true)
    }

    /// Unarchive an entry.
    pub fn unarchive(&self, id: &EntryId) -> Result<Entry> {
        self.mutate(id, |entry| entry.archived = false)
    }

    /// Hard-delete an entry. Irreversible.
    pub fn delete(&self, id: &EntryId) -> Result<()> {
        let deleted = self
            .store
            .run_in_transaction(|tx| sqlite::delete_entry(tx, id))?;
        if deleted {
            tracing::debug!(id = %id, "deleted entry");
            Ok(())
        } else {
            Err(Error::NotFound(*id))
        }
    }

    /// Verify an entry's integrity.
    ///
    /// Recomputes the digest from the stored fields and compares it to the
    /// row key. `Ok(false)` means the row was corrupted or tampered with
    /// after it was written.
    pub fn verify(&self, id: &EntryId) -> Result<bool> {
        let entry = self.get(id)?.ok_or(Error::NotFound(*id))?;
        let recomputed = entry_digest(&entry.url, &entry.title, &entry.excerpt);
        Ok(recomputed == entry.id)
    }

    /// Fetch, apply a state change, and persist, all in one transaction.
    ///
    /// The update is skipped when the closure leaves the entry unchanged.
    fn mutate(&self, id: &EntryId, f: impl FnOnce(&mut Entry)) -> Result<Entry> {
        let updated = self.store.run_in_transaction(|tx| {
            let Some(mut entry) = sqlite::fetch_entry(tx, id)? else {
                return Ok(None);
            };

            let before = entry.clone();
            f(&mut entry);
            if entry != before {
                sqlite::update_entry(tx, &entry)?;
            }
            Ok(Some(entry))
        })?;

        updated.ok_or(Error::NotFound(*id))
    }
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}
