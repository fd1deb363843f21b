//! # Pagemark Core
//!
//! Core primitives for the pagemark reading-list store: the entry model,
//! input canonicalization, and content digests.
//!
//! An entry's identity is its content: the blake3 hash of the canonicalized
//! (url, title, excerpt) triple. Saving the same page twice therefore yields
//! the same [`EntryId`], which is what makes `add` idempotent at the storage
//! layer.
//!
//! ## Key Types
//!
//! - [`Entry`] - One saved reading-list item and its metadata
//! - [`EntryId`] - 32-byte content digest, the entry's primary key
//! - [`EntryFilter`] - Read/archive filters for listing entries
//! - [`ValidationError`] - Rejections raised before any I/O happens

pub mod canonical;
pub mod digest;
pub mod error;
pub mod types;
pub mod validation;

pub use canonical::{canonicalize, digest_preimage, CanonicalFields, DIGEST_VERSION};
pub use digest::entry_digest;
pub use error::ValidationError;
pub use types::{Entry, EntryFilter, EntryId};
pub use validation::validate_url;
