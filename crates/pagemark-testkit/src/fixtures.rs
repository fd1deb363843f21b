//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::path::PathBuf;

use pagemark::{Entry, ReadingList};
use tempfile::TempDir;

/// A test fixture wrapping an open reading list.
///
/// Memory-backed by default. Disk-backed fixtures keep their temporary
/// directory alive for the fixture's lifetime and support [`reopen`] to
/// exercise persistence across process restarts.
///
/// [`reopen`]: TestFixture::reopen
pub struct TestFixture {
    pub list: ReadingList,
    dir: Option<TempDir>,
}

impl TestFixture {
    /// Create a memory-backed fixture. Nothing survives drop.
    pub fn new() -> Self {
        Self {
            list: ReadingList::open_memory().expect("open in-memory store"),
            dir: None,
        }
    }

    /// Create a disk-backed fixture in a fresh temporary directory.
    pub fn on_disk() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let list = ReadingList::open(db_path_in(&dir)).expect("open disk store");
        Self {
            list,
            dir: Some(dir),
        }
    }

    /// Path of the backing database file, if disk-backed.
    pub fn db_path(&self) -> Option<PathBuf> {
        self.dir.as_ref().map(db_path_in)
    }

    /// Close and reopen a disk-backed fixture at the same path.
    ///
    /// Panics on a memory-backed fixture, which has nothing to reopen.
    pub fn reopen(self) -> Self {
        let dir = self.dir.expect("reopen requires a disk-backed fixture");
        drop(self.list);
        let list = ReadingList::open(db_path_in(&dir)).expect("reopen disk store");
        Self {
            list,
            dir: Some(dir),
        }
    }

    /// Save the first `count` sample articles and return them in save order.
    pub fn populate(&self, count: usize) -> Vec<Entry> {
        sample_articles()
            .into_iter()
            .cycle()
            .take(count)
            .enumerate()
            .map(|(i, (url, title, excerpt))| {
                // Make cycled repeats distinct by path.
                let url = format!("{}?n={}", url, i);
                self.list
                    .add(&url, title, excerpt)
                    .expect("add sample article")
            })
            .collect()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn db_path_in(dir: &TempDir) -> PathBuf {
    dir.path().join("pagemark.db")
}

/// Sample article triples (url, title, excerpt) for seeding stores.
pub fn sample_articles() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        (
            "https://example.com/rust-ownership",
            "Understanding Ownership",
            "Ownership is a set of rules that govern how memory is managed.",
        ),
        (
            "https://example.org/sqlite-wal",
            "Write-Ahead Logging",
            "The WAL journal mode offers significantly better concurrency.",
        ),
        (
            "https://blog.example.net/content-addressing",
            "Content Addressing in Practice",
            "Addressing data by digest makes deduplication structural.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populate_counts() {
        let fixture = TestFixture::new();
        let entries = fixture.populate(5);

        assert_eq!(entries.len(), 5);
        assert_eq!(fixture.list.count().unwrap(), 5);

        // Distinct ids throughout, including cycled samples.
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_disk_fixture_reopen() {
        let fixture = TestFixture::on_disk();
        let entries = fixture.populate(2);

        let fixture = fixture.reopen();
        assert_eq!(fixture.list.count().unwrap(), 2);
        for entry in &entries {
            assert_eq!(
                fixture.list.get(&entry.id).unwrap().as_ref(),
                Some(entry)
            );
        }
    }

    #[test]
    fn test_memory_fixture_has_no_path() {
        assert!(TestFixture::new().db_path().is_none());
        assert!(TestFixture::on_disk().db_path().is_some());
    }
}
