//! Error types for the store crate.

use thiserror::Error;

use crate::codec::DecodeError;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened or created at all.
    #[error("cannot open database: {0}")]
    Unopenable(String),

    /// A schema migration failed; the file was left at its previous version.
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// Engine-level failure from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A persisted row did not decode into an entry.
    #[error("row decode failed: {0}")]
    Decode(#[from] DecodeError),

    /// The connection mutex was poisoned by a panicking holder.
    #[error("connection mutex poisoned")]
    Poisoned,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
