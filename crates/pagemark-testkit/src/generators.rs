//! Proptest generators for property-based testing.

use proptest::prelude::*;

use pagemark_core::{canonicalize, entry_digest, Entry};

/// Generate a lowercase host name.
pub fn host() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,15}\\.(com|org|net)".prop_map(String::from)
}

/// Generate a URL path, possibly empty.
pub fn url_path() -> impl Strategy<Value = String> {
    "(/[a-zA-Z0-9._-]{1,12}){0,4}".prop_map(String::from)
}

/// Generate a valid http(s) article URL.
pub fn article_url() -> impl Strategy<Value = String> {
    (prop_oneof![Just("http"), Just("https")], host(), url_path())
        .prop_map(|(scheme, host, path)| format!("{}://{}{}", scheme, host, path))
}

/// Generate a title, possibly empty.
pub fn title() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.!?'-]{0,60}".prop_map(String::from)
}

/// Generate an excerpt, possibly empty.
pub fn excerpt() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.!?'-]{0,200}".prop_map(String::from)
}

/// Generate surrounding whitespace padding.
pub fn padding() -> impl Strategy<Value = String> {
    "[ \\t]{0,4}".prop_map(String::from)
}

/// Raw inputs for one saved article.
#[derive(Debug, Clone)]
pub struct ArticleParams {
    pub url: String,
    pub title: String,
    pub excerpt: String,
}

impl Arbitrary for ArticleParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (article_url(), title(), excerpt())
            .prop_map(|(url, title, excerpt)| ArticleParams {
                url,
                title,
                excerpt,
            })
            .boxed()
    }
}

/// Build a well-formed entry from raw inputs.
///
/// Panics on an invalid URL; pair with [`article_url`] inputs.
pub fn entry_from_params(params: &ArticleParams, added_at: i64) -> Entry {
    let fields =
        canonicalize(&params.url, &params.title, &params.excerpt).expect("valid article url");
    Entry {
        id: entry_digest(&fields.url, &fields.title, &fields.excerpt),
        url: fields.url,
        title: fields.title,
        excerpt: fields.excerpt,
        added_at,
        read_at: None,
        archived: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::TestFixture;
    use pagemark_store::codec;

    proptest! {
        #[test]
        fn test_digest_deterministic(params: ArticleParams) {
            let a = entry_digest(&params.url, &params.title, &params.excerpt);
            let b = entry_digest(&params.url, &params.title, &params.excerpt);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn test_padding_does_not_change_identity(
            params: ArticleParams,
            pad in padding(),
        ) {
            let plain = entry_from_params(&params, 0);
            let padded = entry_from_params(
                &ArticleParams {
                    url: format!("{}{}{}", pad, params.url, pad),
                    title: format!("{}{}{}", pad, params.title, pad),
                    excerpt: format!("{}{}{}", pad, params.excerpt, pad),
                },
                0,
            );
            prop_assert_eq!(plain.id, padded.id);
        }

        #[test]
        fn test_title_change_changes_identity(
            params: ArticleParams,
            other in title(),
        ) {
            prop_assume!(params.title.trim() != other.trim());

            let a = entry_from_params(&params, 0);
            let b = entry_from_params(
                &ArticleParams {
                    title: other,
                    ..params.clone()
                },
                0,
            );
            prop_assert_ne!(a.id, b.id);
        }

        #[test]
        fn test_add_is_idempotent(params: ArticleParams) {
            let fixture = TestFixture::new();
            let first = fixture.list.add(&params.url, &params.title, &params.excerpt).unwrap();
            let second = fixture.list.add(&params.url, &params.title, &params.excerpt).unwrap();

            prop_assert_eq!(first, second);
            prop_assert_eq!(fixture.list.count().unwrap(), 1);
        }

        #[test]
        fn test_codec_round_trip(
            params: ArticleParams,
            added_at in 0i64..=1_900_000_000_000i64,
            read_at in proptest::option::of(0i64..=1_900_000_000_000i64),
            archived: bool,
        ) {
            let mut entry = entry_from_params(&params, added_at);
            entry.read_at = read_at;
            entry.archived = archived;

            let row = codec::encode(&entry);
            let decoded = codec::decode(&row).unwrap();
            prop_assert_eq!(entry, decoded);
        }
    }
}
