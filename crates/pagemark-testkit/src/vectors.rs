//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the canonicalization rules and the digest itself: if a
//! release changes how inputs map to entry identities, the expected canonical
//! forms or the pinned ids here stop matching.

use pagemark_core::{canonicalize, entry_digest, EntryId};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Raw URL as a caller would pass it.
    pub url: &'static str,
    /// Raw title.
    pub title: &'static str,
    /// Raw excerpt.
    pub excerpt: &'static str,
    /// Canonical URL the raw inputs must normalize to.
    pub expected_url: &'static str,
    /// Expected entry id (hex).
    pub expected_id: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "plain article",
            url: "https://example.com/a",
            title: "A",
            excerpt: "excerpt",
            expected_url: "https://example.com/a",
            expected_id: "892ad6a97f6c5ce9df53e2e72839e5e222e0a4381bc90b3a20d0493d90d21e92",
        },
        GoldenVector {
            name: "scheme and host lowercased, fields trimmed",
            url: "  HTTPS://Example.COM/Articles/One  ",
            title: "  Shouting Title  ",
            excerpt: "\tpadded excerpt\t",
            expected_url: "https://example.com/Articles/One",
            expected_id: "b3b48adcc0c43f5741e69e1235ed4c59bd54571ca1f8b908acdc76ebfd455a48",
        },
        GoldenVector {
            name: "bare host gains root path",
            url: "http://example.org",
            title: "",
            excerpt: "",
            expected_url: "http://example.org/",
            expected_id: "1c7f08289a5c4358d42b71115d201f4c81b4347d2782347dcafe8fb2eaac1a1e",
        },
        GoldenVector {
            name: "query string preserved",
            url: "https://example.net/read?id=42",
            title: "Query",
            excerpt: "q",
            expected_url: "https://example.net/read?id=42",
            expected_id: "4e6da9ab308cd2c48220aed94772a396f1a7041153afaf0696ee21695f9ec625",
        },
    ]
}

/// Compute the entry id for a golden vector's raw inputs.
pub fn digest_from_vector(vector: &GoldenVector) -> EntryId {
    let fields = canonicalize(vector.url, vector.title, vector.excerpt)
        .expect("golden vector URL must be valid");
    entry_digest(&fields.url, &fields.title, &fields.excerpt)
}

/// Verify all golden vectors.
///
/// Returns (name, matches, id_hex) per vector. A vector matches only when
/// both its canonical URL and its pinned entry id come out as recorded.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let fields = canonicalize(v.url, v.title, v.excerpt)
                .expect("golden vector URL must be valid");
            let hex = entry_digest(&fields.url, &fields.title, &fields.excerpt).to_hex();

            let matches = fields.url == v.expected_url && hex == v.expected_id;

            (v.name.to_string(), matches, hex)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectors_canonicalize_as_expected() {
        for vector in all_vectors() {
            let fields = canonicalize(vector.url, vector.title, vector.excerpt)
                .expect("golden vector URL must be valid");
            assert_eq!(
                fields.url, vector.expected_url,
                "vector '{}' canonicalized differently",
                vector.name
            );
            assert_eq!(fields.title, vector.title.trim());
            assert_eq!(fields.excerpt, vector.excerpt.trim());
        }
    }

    #[test]
    fn test_vectors_are_deterministic() {
        for vector in all_vectors() {
            let id1 = digest_from_vector(&vector);
            let id2 = digest_from_vector(&vector);
            assert_eq!(
                id1, id2,
                "vector '{}' produced different ids on recomputation",
                vector.name
            );
        }
    }

    #[test]
    fn test_vectors_have_distinct_ids() {
        let ids: Vec<EntryId> = all_vectors().iter().map(digest_from_vector).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_vectors_match_pinned_ids() {
        for vector in all_vectors() {
            assert_eq!(
                digest_from_vector(&vector).to_hex(),
                vector.expected_id,
                "vector '{}' digest drifted",
                vector.name
            );
        }
    }

    #[test]
    fn test_verify_all_vectors_passes() {
        for (name, matches, hex) in verify_all_vectors() {
            assert!(matches, "vector '{}' failed (got {})", name, hex);
            assert_eq!(hex.len(), 64);
        }
    }
}
