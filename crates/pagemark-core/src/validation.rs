//! URL validation: structural checks applied before any storage I/O.

use url::Url;

use crate::error::ValidationError;

/// Validate a raw URL string for use as an entry's address.
///
/// Accepts absolute http/https URLs with a host. The returned [`Url`] is the
/// parser's normalized form: scheme and host lowercased, path untouched.
///
/// # Errors
///
/// - [`ValidationError::EmptyUrl`] if the trimmed input is empty
/// - [`ValidationError::InvalidUrl`] if it does not parse as an absolute URL
/// - [`ValidationError::UnsupportedScheme`] for anything but http/https
/// - [`ValidationError::MissingHost`] if the URL has no host component
pub fn validate_url(raw: &str) -> Result<Url, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }

    let url = Url::parse(trimmed)?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(ValidationError::UnsupportedScheme(scheme.to_string())),
    }

    if url.host_str().is_none() {
        return Err(ValidationError::MissingHost);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(validate_url("https://example.com/article").is_ok());
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("  https://example.com/a?q=1#frag  ").is_ok());
    }

    #[test]
    fn test_empty_url() {
        assert!(matches!(validate_url(""), Err(ValidationError::EmptyUrl)));
        assert!(matches!(
            validate_url("   "),
            Err(ValidationError::EmptyUrl)
        ));
    }

    #[test]
    fn test_relative_url() {
        assert!(matches!(
            validate_url("/articles/1"),
            Err(ValidationError::InvalidUrl(_))
        ));
        assert!(matches!(
            validate_url("example.com/a"),
            Err(ValidationError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_unsupported_scheme() {
        assert!(matches!(
            validate_url("file:///etc/passwd"),
            Err(ValidationError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            validate_url("ftp://example.com/a"),
            Err(ValidationError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_host_normalized() {
        let url = validate_url("HTTP://WWW.Example.COM/Mixed/Case").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_str(), Some("www.example.com"));
        assert_eq!(url.path(), "/Mixed/Case");
    }
}
