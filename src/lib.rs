//! url-builder - fluent, mutable builder over templated URL strings
//!
//! A URL is parsed once into a scheme, a hostname, an ordered list of path
//! segments and an ordered query map. Path segments written as `{name}` are
//! placeholders that can be filled later by name or by position. The builder
//! is then mutated through chained setters and rendered back with
//! `to_string()`.
//!
//! # Quick Start
//!
//! ```
//! use url_builder::{QueryArray, UrlBuilder};
//!
//! let mut builder = UrlBuilder::parse("https://github.com/{user}/{repo}?page=1")?;
//! builder
//!     .set_params([("user", "ikeohachidi"), ("repo", "url-builder")])
//!     .set_query("limit", 40)
//!     .set_query_array("q", QueryArray::new(";", ["first", "second"]));
//!
//! assert_eq!(
//!     builder.to_string(),
//!     "https://github.com/ikeohachidi/url-builder?page=1&limit=40&q=first;second"
//! );
//!
//! // Unfilled placeholders stay visible
//! let template = UrlBuilder::parse("https://github.com/{user}/repo")?;
//! assert_eq!(template.to_string(), "https://github.com/{user}/repo");
//! # Ok::<(), url_builder::BuilderError>(())
//! ```
//!
//! # Rendering Rules
//!
//! | Part        | Rendered as                                   |
//! |-------------|-----------------------------------------------|
//! | scheme      | `scheme://`, omitted when empty               |
//! | hostname    | verbatim                                      |
//! | segment     | `/value`, `/{name}` if unfilled, else skipped |
//! | queries     | `?k=v&k2=v2` in insertion order               |
//!
//! # Error Handling
//!
//! Only construction can fail, with [`BuilderError::ParseError`] when the
//! input has no hostname. Setters never fail: unknown placeholder names,
//! out-of-range indices and blank values are ignored.

// Re-export the builder and its parsing/rendering entry points
pub use self::core::{parse_query_string, parse_segment, parse_url, render_url, UrlBuilder};

// Re-export public types
pub use error::BuilderError;
pub use types::{ParamKey, ParsedUrl, PathSegment, Primitive, QueryArray, Scheme};
pub use self::url::{canonical_scheme, decode_query_value, placeholder_name, split_scheme};

// Module declarations
pub mod core;
pub mod error;
pub mod types;
pub mod url;
