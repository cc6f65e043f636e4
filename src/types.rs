//! Core data structures for the URL builder.

use std::borrow::Cow;
use std::fmt;

/// A scalar value stored in a path segment or query parameter.
///
/// `Absent` is the "no value" variant. Only `Absent` and an empty `Text`
/// count as blank; `Bool(false)` and `Int(0)` are real values.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Primitive {
    #[default]
    Absent,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Primitive {
    /// True for `Absent` and for empty text.
    pub fn is_blank(&self) -> bool {
        match self {
            Primitive::Absent => true,
            Primitive::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Borrow the text payload, if this is a `Text` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Primitive::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Render the value the way it appears in a URL. `Absent` renders empty.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Primitive::Absent => Cow::Borrowed(""),
            Primitive::Text(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Absent => Ok(()),
            Primitive::Bool(b) => write!(f, "{}", b),
            Primitive::Int(n) => write!(f, "{}", n),
            Primitive::Float(n) => write!(f, "{}", n),
            Primitive::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Primitive::Text(value.to_string())
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Primitive::Text(value)
    }
}

impl From<&String> for Primitive {
    fn from(value: &String) -> Self {
        Primitive::Text(value.clone())
    }
}

impl From<bool> for Primitive {
    fn from(value: bool) -> Self {
        Primitive::Bool(value)
    }
}

impl From<i32> for Primitive {
    fn from(value: i32) -> Self {
        Primitive::Int(i64::from(value))
    }
}

impl From<u32> for Primitive {
    fn from(value: u32) -> Self {
        Primitive::Int(i64::from(value))
    }
}

impl From<i64> for Primitive {
    fn from(value: i64) -> Self {
        Primitive::Int(value)
    }
}

impl From<f64> for Primitive {
    fn from(value: f64) -> Self {
        Primitive::Float(value)
    }
}

impl<T: Into<Primitive>> From<Option<T>> for Primitive {
    fn from(value: Option<T>) -> Self {
        value.map_or(Primitive::Absent, Into::into)
    }
}

impl PartialEq<&str> for Primitive {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

/// Addresses a path segment either by position or by placeholder name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamKey {
    Index(usize),
    Name(String),
}

impl ParamKey {
    /// Interpret a textual key: all-digit tokens are indices, anything else a name.
    pub fn from_token(token: &str) -> Self {
        match token.parse::<usize>() {
            Ok(index) if token.bytes().all(|b| b.is_ascii_digit()) => ParamKey::Index(index),
            _ => ParamKey::Name(token.to_string()),
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKey::Index(i) => write!(f, "{}", i),
            ParamKey::Name(n) => f.write_str(n),
        }
    }
}

impl From<usize> for ParamKey {
    fn from(value: usize) -> Self {
        ParamKey::Index(value)
    }
}

impl From<&str> for ParamKey {
    fn from(value: &str) -> Self {
        ParamKey::Name(value.to_string())
    }
}

impl From<String> for ParamKey {
    fn from(value: String) -> Self {
        ParamKey::Name(value)
    }
}

impl From<&String> for ParamKey {
    fn from(value: &String) -> Self {
        ParamKey::Name(value.clone())
    }
}

/// One slash-delimited component of the path, hostname excluded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathSegment {
    pub value: Primitive,
    pub placeholder: Option<String>,
}

impl PathSegment {
    /// A segment carrying a literal value.
    pub fn literal(value: impl Into<Primitive>) -> Self {
        Self {
            value: value.into(),
            placeholder: None,
        }
    }

    /// An unfilled `{name}` segment.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            value: Primitive::Absent,
            placeholder: Some(name.into()),
        }
    }

    /// A placeholder that has not been given a value yet.
    pub fn is_unresolved(&self) -> bool {
        self.value.is_blank() && self.placeholder.is_some()
    }

    /// Text emitted after the `/` for this segment, or `None` if it is skipped.
    pub fn rendered(&self) -> Option<Cow<'_, str>> {
        if !self.value.is_blank() {
            return Some(self.value.render());
        }
        self.placeholder
            .as_ref()
            .map(|name| Cow::Owned(format!("{{{}}}", name)))
    }
}

/// Joined query value: `values` are rendered and joined with `sep`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryArray {
    pub sep: String,
    pub values: Vec<Primitive>,
}

impl QueryArray {
    /// Create a new query array from a separator and values.
    pub fn new<I, V>(sep: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Primitive>,
    {
        Self {
            sep: sep.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The single string stored under the query key.
    pub fn joined(&self) -> String {
        self.values
            .iter()
            .map(Primitive::render)
            .collect::<Vec<_>>()
            .join(&self.sep)
    }
}

/// Common schemes, usable wherever a scheme string is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl AsRef<str> for Scheme {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured form of a URL owned by a builder.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedUrl {
    /// Lower-case scheme without separators; empty when unset.
    pub scheme: String,
    pub hostname: String,
    pub segments: Vec<PathSegment>,
    /// Unique keys in insertion order.
    pub queries: Vec<(String, Primitive)>,
}

impl ParsedUrl {
    /// Position of `key` in the query list.
    pub fn query_position(&self, key: &str) -> Option<usize> {
        self.queries.iter().position(|(k, _)| k == key)
    }

    /// Overwrite `key` in place, or append it if new.
    pub fn upsert_query(&mut self, key: String, value: Primitive) {
        match self.query_position(&key) {
            Some(pos) => self.queries[pos].1 = value,
            None => self.queries.push((key, value)),
        }
    }
}
