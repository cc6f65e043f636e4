//! Parsing of raw URL strings into a [`ParsedUrl`].

use tracing::debug;

use crate::error::BuilderError;
use crate::types::{ParsedUrl, PathSegment, Primitive};
use crate::url::utils::{canonical_scheme, placeholder_name, split_scheme};

/// Parse `input` into its structured form.
///
/// This function:
/// 1. Splits off a leading `scheme://` (schemeless input keeps an empty scheme)
/// 2. Separates path from query at the first `?`
/// 3. Takes the first `/`-delimited element as the hostname
/// 4. Turns each remaining element into a literal or `{placeholder}` segment
/// 5. Collects `key=value` query pairs, dropping pairs without a value
///
/// Fails only when no hostname can be established.
///
/// # Examples
///
/// ```
/// use url_builder::parse_url;
///
/// let parsed = parse_url("https://github.com/{user}/repo?page=1").unwrap();
/// assert_eq!(parsed.scheme, "https");
/// assert_eq!(parsed.hostname, "github.com");
/// assert_eq!(parsed.segments.len(), 2);
/// assert_eq!(parsed.queries.len(), 1);
/// ```
pub fn parse_url(input: &str) -> Result<ParsedUrl, BuilderError> {
    if input.is_empty() {
        return Err(BuilderError::ParseError("empty input".to_string()));
    }

    let (scheme, rest) = split_scheme(input);
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    let mut elements = path.split('/');
    let hostname = elements.next().unwrap_or_default();
    if hostname.is_empty() {
        return Err(BuilderError::ParseError(format!(
            "no hostname in {:?}",
            input
        )));
    }

    let parsed = ParsedUrl {
        scheme: scheme.map(canonical_scheme).unwrap_or_default(),
        hostname: hostname.to_string(),
        segments: elements.map(parse_segment).collect(),
        queries: query.map(parse_query_string).unwrap_or_default(),
    };

    debug!(
        scheme = %parsed.scheme,
        hostname = %parsed.hostname,
        segments = parsed.segments.len(),
        queries = parsed.queries.len(),
        "parsed url"
    );

    Ok(parsed)
}

/// Classify a single path element.
pub fn parse_segment(element: &str) -> PathSegment {
    match placeholder_name(element) {
        Some(name) => PathSegment::placeholder(name),
        None if element.is_empty() => PathSegment::literal(Primitive::Absent),
        None => PathSegment::literal(element),
    }
}

/// Split a query string into unique `(key, raw value)` pairs.
///
/// Pairs with no `=`, an empty key, or an empty value are not parameters and
/// are dropped. A repeated key overwrites the earlier value in place.
pub fn parse_query_string(query: &str) -> Vec<(String, Primitive)> {
    let mut queries: Vec<(String, Primitive)> = Vec::new();
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if key.is_empty() || value.is_empty() {
            continue;
        }
        match queries.iter_mut().find(|(k, _)| k.as_str() == key) {
            Some(entry) => entry.1 = Primitive::from(value),
            None => queries.push((key.to_string(), Primitive::from(value))),
        }
    }
    queries
}
