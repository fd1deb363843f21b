//! # Pagemark
//!
//! A local reading-list store: a persistent, content-addressable cache of
//! saved articles backed by SQLite, with blake3 digests for deduplication
//! and integrity verification.
//!
//! The disk engine is the single source of truth. Every public operation is
//! one blocking transaction: it commits durably before returning success and
//! never leaves a partially-applied change behind. There are no background
//! tasks, timers, or eviction sweeps; deletion is always explicit.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pagemark::{EntryFilter, ReadingList};
//!
//! let list = ReadingList::open("reading-list.db").unwrap();
//!
//! let entry = list
//!     .add("https://example.com/a", "A", "excerpt")
//!     .unwrap();
//!
//! list.mark_read(&entry.id).unwrap();
//!
//! for entry in list.list(EntryFilter::Read).unwrap() {
//!     println!("{} {}", entry.id, entry.url);
//! }
//! ```
//!
//! ## Concurrency
//!
//! Operations are synchronous and blocking. They are safe to call from any
//! worker thread, but callers in a context where blocking is prohibited must
//! dispatch off-thread themselves. This crate never retries on its own;
//! retry policy belongs to the caller.

pub mod error;
pub mod reading_list;

pub use error::{Error, Result};
pub use reading_list::ReadingList;

pub use pagemark_core::{entry_digest, Entry, EntryFilter, EntryId, ValidationError};
pub use pagemark_store::{DecodeError, StoreError};
