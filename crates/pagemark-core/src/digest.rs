//! The entry digest: blake3 over the canonical preimage.

use crate::canonical::digest_preimage;
use crate::types::EntryId;

/// Compute the content digest of an entry from its canonical fields.
///
/// Pure and deterministic: the same (url, title, excerpt) triple yields the
/// same [`EntryId`] across repeated calls and process restarts. Callers are
/// expected to pass already-canonicalized fields (see
/// [`canonicalize`](crate::canonical::canonicalize)); stored entries satisfy
/// `entry.id == entry_digest(&entry.url, &entry.title, &entry.excerpt)`.
///
/// Collisions are treated as negligible. There is no collision-handling
/// path; this is an accepted risk, not a silent merge.
pub fn entry_digest(url: &str, title: &str, excerpt: &str) -> EntryId {
    let preimage = digest_preimage(url, title, excerpt);
    EntryId(*blake3::hash(&preimage).as_bytes())
}
