//! Strong type definitions for the pagemark store.
//!
//! The entry identifier is a newtype to prevent misuse at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte entry identifier, computed as blake3(digest_preimage(url, title, excerpt)).
///
/// This is the content-address of an entry. Two entries with the same
/// canonicalized url, title, and excerpt have the same EntryId; changing any
/// of the three produces a new EntryId (a new entry, never an update).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(pub [u8; 32]);

impl EntryId {
    /// Create a new EntryId from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryId({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for EntryId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for EntryId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for EntryId {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 32] = slice.try_into()?;
        Ok(Self(arr))
    }
}

/// One saved reading-list item.
///
/// The url, title, and excerpt fields hold the *canonicalized* forms, so the
/// invariant `entry.id == entry_digest(&entry.url, &entry.title, &entry.excerpt)`
/// holds for every well-formed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Content digest, the primary key. Immutable.
    pub id: EntryId,
    /// Canonicalized absolute URL. Never empty.
    pub url: String,
    /// Title, may be empty.
    pub title: String,
    /// Excerpt snippet, may be empty.
    pub excerpt: String,
    /// Creation time (Unix ms). Set once, immutable.
    pub added_at: i64,
    /// Read time (Unix ms). None means unread.
    pub read_at: Option<i64>,
    /// Whether the entry is archived.
    pub archived: bool,
}

impl Entry {
    /// Whether the entry has been marked read.
    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }
}

/// Filter for listing entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryFilter {
    /// All live entries.
    All,
    /// Entries with no read timestamp.
    Unread,
    /// Entries with a read timestamp.
    Read,
    /// Archived entries.
    Archived,
    /// Non-archived entries.
    Unarchived,
}
