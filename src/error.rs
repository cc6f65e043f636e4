//! Error types for URL builder construction and conversion.

use thiserror::Error;

/// Errors surfaced by [`UrlBuilder`](crate::UrlBuilder).
///
/// Lookups and setters never fail; only construction and the explicit
/// conversion into [`url::Url`] can.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuilderError {
    /// The input did not yield a hostname.
    #[error("URL parsing failed: {0}")]
    ParseError(String),

    /// The rendered string was rejected by the url crate.
    #[error("URL parsing error: {0}")]
    UrlParseError(String),
}

impl From<url::ParseError> for BuilderError {
    fn from(err: url::ParseError) -> Self {
        BuilderError::UrlParseError(err.to_string())
    }
}
