//! Error types for the public reading-list API.
//!
//! Every failure is distinguishable by kind, so callers can decide between
//! retrying, surfacing, and aborting. No error here is the result of a
//! silent coercion.

use thiserror::Error;

use pagemark_core::{EntryId, ValidationError};
use pagemark_store::StoreError;

/// Errors surfaced by [`ReadingList`](crate::ReadingList) operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input rejected before any I/O (malformed URL, empty required field).
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The operation referenced a digest with no live row.
    #[error("entry not found: {0}")]
    NotFound(EntryId),

    /// Engine-level failure, surfaced unchanged.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Result type for reading-list operations.
pub type Result<T> = std::result::Result<T, Error>;
