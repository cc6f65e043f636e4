//! String helpers shared by the parser and the builder.
//!
//! These work on plain `&str` input and never allocate unless they have to
//! change something.

use percent_encoding::percent_decode_str;
use std::borrow::Cow;

/// Split a leading `scheme://` prefix off `input`.
///
/// A scheme is an ASCII letter followed by letters, digits, `+`, `-` or `.`.
/// Anything else before the first `://` (for example a `/` or `?`) means the
/// input is schemeless.
///
/// # Examples
///
/// ```
/// use url_builder::split_scheme;
///
/// assert_eq!(split_scheme("https://github.com"), (Some("https"), "github.com"));
/// assert_eq!(split_scheme("github.com/a?u=http://x"), (None, "github.com/a?u=http://x"));
/// ```
pub fn split_scheme(input: &str) -> (Option<&str>, &str) {
    match input.split_once("://") {
        Some((scheme, rest)) if is_scheme_token(scheme) => (Some(scheme), rest),
        _ => (None, input),
    }
}

fn is_scheme_token(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Canonical scheme form: separators removed, lower-cased.
///
/// # Examples
///
/// ```
/// use url_builder::canonical_scheme;
///
/// assert_eq!(canonical_scheme("HTTPS://"), "https");
/// assert_eq!(canonical_scheme("ws:"), "ws");
/// ```
pub fn canonical_scheme(scheme: &str) -> String {
    scheme
        .chars()
        .filter(|c| !matches!(c, ':' | '/'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Return the placeholder name when `segment` is exactly `{name}`.
///
/// # Examples
///
/// ```
/// use url_builder::placeholder_name;
///
/// assert_eq!(placeholder_name("{user}"), Some("user"));
/// assert_eq!(placeholder_name("user"), None);
/// assert_eq!(placeholder_name("{}"), None);
/// ```
pub fn placeholder_name(segment: &str) -> Option<&str> {
    segment
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .filter(|name| !name.is_empty() && !name.contains(['{', '}']))
}

/// Decode a raw query value for display: `+` becomes a space, then
/// percent-escapes are decoded. Invalid UTF-8 is replaced lossily.
///
/// # Examples
///
/// ```
/// use url_builder::decode_query_value;
///
/// assert_eq!(decode_query_value("git%20lab"), "git lab");
/// assert_eq!(decode_query_value("hello+world"), "hello world");
/// ```
pub fn decode_query_value(raw: &str) -> String {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
