//! # Pagemark Store
//!
//! Record codec and SQLite storage adapter for the pagemark reading-list
//! store. This crate owns the on-disk file: schema management, versioned
//! migrations, and explicit transaction boundaries.
//!
//! ## Key Types
//!
//! - [`SqliteStore`] - the storage engine adapter; owns the connection
//! - [`Row`] / [`Value`] - tagged row representation handed to the codec
//! - [`codec::encode`] / [`codec::decode`] - Entry <-> Row conversion
//! - [`StoreError`] / [`DecodeError`] - typed failures, never coerced
//!
//! ## Transactions
//!
//! Every multi-statement operation goes through
//! [`SqliteStore::run_in_transaction`]: commit on `Ok`, rollback on `Err`.
//! A caller never observes a partially-applied operation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pagemark_store::{sqlite, SqliteStore};
//! use pagemark_core::EntryId;
//!
//! let store = SqliteStore::open("reading-list.db").unwrap();
//! let id = EntryId::from_bytes([0u8; 32]);
//! let entry = store
//!     .run_in_transaction(|tx| sqlite::fetch_entry(tx, &id))
//!     .unwrap();
//! ```

pub mod codec;
pub mod error;
pub mod migration;
pub mod sqlite;

pub use codec::{DecodeError, Row, Value, ROW_VERSION};
pub use error::{Result, StoreError};
pub use sqlite::SqliteStore;
