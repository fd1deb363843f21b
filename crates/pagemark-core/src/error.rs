//! Error types for pagemark core.

use thiserror::Error;

/// Validation errors raised before any storage I/O.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("url is empty")]
    EmptyUrl,

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unsupported url scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),

    #[error("url has no host")]
    MissingHost,
}
