//! The fluent URL builder.

use std::fmt;
use std::str::FromStr;

use tracing::trace;
use url::Url;

use crate::core::parser::parse_url;
use crate::error::BuilderError;
use crate::types::{ParamKey, ParsedUrl, PathSegment, Primitive, QueryArray};
use crate::url::utils::{canonical_scheme, decode_query_value};

/// Mutable builder over a structured URL.
///
/// Setters take `&mut self` and return `&mut Self` so calls can be chained.
/// They never fail: unknown keys, out-of-range indices and blank values are
/// silently ignored, which lets callers set template variables speculatively.
///
/// # Examples
///
/// ```
/// use url_builder::UrlBuilder;
///
/// let mut builder = UrlBuilder::parse("https://github.com/{user}/{repo}")?;
/// builder
///     .set_param("user", "ikeohachidi")
///     .set_param("repo", "url-builder")
///     .set_query("tab", "readme");
///
/// assert_eq!(
///     builder.to_string(),
///     "https://github.com/ikeohachidi/url-builder?tab=readme"
/// );
/// # Ok::<(), url_builder::BuilderError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UrlBuilder {
    url: ParsedUrl,
}

impl UrlBuilder {
    /// A builder with no scheme, hostname, path or query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `input` into a builder. Fails when no hostname can be found.
    pub fn parse(input: &str) -> Result<Self, BuilderError> {
        Ok(Self {
            url: parse_url(input)?,
        })
    }

    /// Parse `input` when given, otherwise start empty.
    pub fn create(input: Option<&str>) -> Result<Self, BuilderError> {
        match input {
            Some(input) => Self::parse(input),
            None => Ok(Self::new()),
        }
    }

    pub fn set_scheme(&mut self, scheme: impl AsRef<str>) -> &mut Self {
        self.url.scheme = canonical_scheme(scheme.as_ref());
        self
    }

    pub fn set_host_name(&mut self, hostname: impl Into<String>) -> &mut Self {
        self.url.hostname = hostname.into();
        self
    }

    /// Fill a path segment by index or by placeholder name.
    ///
    /// A blank value leaves the segment untouched. Every segment carrying the
    /// named placeholder is updated.
    pub fn set_param(&mut self, key: impl Into<ParamKey>, value: impl Into<Primitive>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        if value.is_blank() {
            trace!(%key, "ignoring blank path parameter");
            return self;
        }

        match &key {
            ParamKey::Index(index) => match self.url.segments.get_mut(*index) {
                Some(segment) => segment.value = value,
                None => trace!(index, "path index out of range"),
            },
            ParamKey::Name(name) => {
                let mut matched = false;
                for segment in self
                    .url
                    .segments
                    .iter_mut()
                    .filter(|s| s.placeholder.as_deref() == Some(name.as_str()))
                {
                    segment.value = value.clone();
                    matched = true;
                }
                if !matched {
                    trace!(%name, "no placeholder with this name");
                }
            }
        }
        self
    }

    /// Apply [`set_param`](Self::set_param) to each pair in iteration order.
    pub fn set_params<I, K, V>(&mut self, params: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<ParamKey>,
        V: Into<Primitive>,
    {
        for (key, value) in params {
            self.set_param(key, value);
        }
        self
    }

    /// Append a literal segment after the last one. Blank values are skipped.
    pub fn add_param(&mut self, value: impl Into<Primitive>) -> &mut Self {
        let value = value.into();
        if value.is_blank() {
            trace!("ignoring blank appended segment");
            return self;
        }
        self.url.segments.push(PathSegment::literal(value));
        self
    }

    pub fn add_params<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Primitive>,
    {
        for value in values {
            self.add_param(value);
        }
        self
    }

    /// Set or overwrite a query parameter, keeping its original position.
    pub fn set_query(&mut self, key: impl Into<String>, value: impl Into<Primitive>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        if key.is_empty() || value.is_blank() {
            trace!(%key, "ignoring empty query key or blank value");
            return self;
        }
        self.url.upsert_query(key, value);
        self
    }

    /// Store `array`'s values joined by its separator under `key`.
    pub fn set_query_array(&mut self, key: impl Into<String>, array: QueryArray) -> &mut Self {
        let key = key.into();
        if key.is_empty() {
            trace!("ignoring empty query key");
            return self;
        }
        self.url.upsert_query(key, Primitive::Text(array.joined()));
        self
    }

    pub fn set_query_arrays<I, K>(&mut self, arrays: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, QueryArray)>,
        K: Into<String>,
    {
        for (key, array) in arrays {
            self.set_query_array(key, array);
        }
        self
    }

    pub fn remove_query(&mut self, key: &str) -> &mut Self {
        match self.url.query_position(key) {
            Some(pos) => {
                self.url.queries.remove(pos);
            }
            None => trace!(key, "query key not present"),
        }
        self
    }

    pub fn get_scheme(&self) -> &str {
        &self.url.scheme
    }

    pub fn get_host_name(&self) -> &str {
        &self.url.hostname
    }

    /// Every segment in path order, keyed by placeholder name where one
    /// exists and by index otherwise.
    pub fn get_params(&self) -> Vec<(ParamKey, Primitive)> {
        self.url
            .segments
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                let key = match &segment.placeholder {
                    Some(name) => ParamKey::Name(name.clone()),
                    None => ParamKey::Index(index),
                };
                (key, segment.value.clone())
            })
            .collect()
    }

    /// Value of one segment. `None` when the index is out of range or no
    /// placeholder matches; an unfilled placeholder yields `Absent`.
    pub fn get_param(&self, key: impl Into<ParamKey>) -> Option<&Primitive> {
        match key.into() {
            ParamKey::Index(index) => self.url.segments.get(index).map(|s| &s.value),
            ParamKey::Name(name) => self
                .url
                .segments
                .iter()
                .find(|s| s.placeholder.as_deref() == Some(name.as_str()))
                .map(|s| &s.value),
        }
    }

    /// All query parameters with `+` and percent-escapes decoded.
    pub fn get_query(&self) -> Vec<(String, String)> {
        self.url
            .queries
            .iter()
            .map(|(key, value)| (key.clone(), decode_query_value(&value.render())))
            .collect()
    }

    /// One decoded query value.
    pub fn get_query_value(&self, key: &str) -> Option<String> {
        self.get_raw_query_value(key)
            .map(|value| decode_query_value(&value.render()))
    }

    /// All query parameters exactly as stored.
    pub fn get_raw_query(&self) -> &[(String, Primitive)] {
        &self.url.queries
    }

    pub fn get_raw_query_value(&self, key: &str) -> Option<&Primitive> {
        self.url
            .query_position(key)
            .map(|pos| &self.url.queries[pos].1)
    }

    /// Read-only view of the structured representation.
    pub fn parts(&self) -> &ParsedUrl {
        &self.url
    }

    pub fn into_parts(self) -> ParsedUrl {
        self.url
    }

    /// Parse the rendered string with the `url` crate.
    pub fn to_url(&self) -> Result<Url, BuilderError> {
        Ok(Url::parse(&self.to_string())?)
    }
}

impl fmt::Display for UrlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.url, f)
    }
}

impl FromStr for UrlBuilder {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<ParsedUrl> for UrlBuilder {
    fn from(url: ParsedUrl) -> Self {
        Self { url }
    }
}
