//! Canonicalization and the deterministic digest preimage.
//!
//! The entry digest must be stable across process restarts and platforms, so
//! the preimage is a canonical CBOR map: fixed ascending integer keys,
//! definite lengths, text values only. Cosmetic variations of an
//! already-saved page (surrounding whitespace, an upper-cased host) must not
//! produce a second entry, so inputs are canonicalized before they reach the
//! preimage:
//!
//! - all three fields are trimmed of surrounding whitespace
//! - the URL scheme and host are lowercased; the path, query, and fragment
//!   stay case-sensitive

use ciborium::value::Value;
use url::Url;

use crate::error::ValidationError;
use crate::validation::validate_url;

/// Version tag mixed into the preimage so a future canonicalization change
/// cannot silently collide with v1 digests.
pub const DIGEST_VERSION: u64 = 1;

/// Preimage map keys (integer keys for compact encoding).
///
/// Keys 0-23 encode as single bytes in CBOR.
mod keys {
    pub const VERSION: u64 = 0;
    pub const URL: u64 = 1;
    pub const TITLE: u64 = 2;
    pub const EXCERPT: u64 = 3;
}

/// The canonicalized fields of an entry, ready for digesting and storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalFields {
    pub url: String,
    pub title: String,
    pub excerpt: String,
}

/// Canonicalize a raw (url, title, excerpt) triple.
///
/// Validates the URL (non-empty, absolute, http/https) and normalizes its
/// scheme and host casing. Title and excerpt are trimmed and otherwise kept
/// verbatim. Fails with [`ValidationError`] before any I/O is attempted.
pub fn canonicalize(
    raw_url: &str,
    title: &str,
    excerpt: &str,
) -> Result<CanonicalFields, ValidationError> {
    let url: Url = validate_url(raw_url)?;
    Ok(CanonicalFields {
        url: String::from(url),
        title: title.trim().to_string(),
        excerpt: excerpt.trim().to_string(),
    })
}

/// Encode the digest preimage for already-canonical fields.
///
/// Format: CBOR map `{0: DIGEST_VERSION, 1: url, 2: title, 3: excerpt}` with
/// keys in ascending order and definite lengths. Pure function, no I/O.
pub fn digest_preimage(url: &str, title: &str, excerpt: &str) -> Vec<u8> {
    let value = Value::Map(vec![
        (
            Value::Integer(keys::VERSION.into()),
            Value::Integer(DIGEST_VERSION.into()),
        ),
        (
            Value::Integer(keys::URL.into()),
            Value::Text(url.to_string()),
        ),
        (
            Value::Integer(keys::TITLE.into()),
            Value::Text(title.to_string()),
        ),
        (
            Value::Integer(keys::EXCERPT.into()),
            Value::Text(excerpt.to_string()),
        ),
    ]);

    let mut buf = Vec::new();
    // Writing to a Vec cannot fail, and Value::Map with text/integer members
    // always encodes.
    ciborium::into_writer(&value, &mut buf).expect("CBOR encoding of preimage map");
    buf
}
