//! Rendering a [`ParsedUrl`] back into a URL string.

use std::fmt::{self, Write};

use crate::types::ParsedUrl;

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}://", self.scheme)?;
        }
        f.write_str(&self.hostname)?;

        // Literal blanks collapse; unfilled placeholders stay visible as {name}.
        for segment in &self.segments {
            if let Some(text) = segment.rendered() {
                f.write_char('/')?;
                f.write_str(&text)?;
            }
        }

        for (i, (key, value)) in self.queries.iter().enumerate() {
            f.write_char(if i == 0 { '?' } else { '&' })?;
            write!(f, "{}={}", key, value)?;
        }

        Ok(())
    }
}

/// Render `url` to its canonical string form.
///
/// # Examples
///
/// ```
/// use url_builder::{parse_url, render_url};
///
/// let parsed = parse_url("https://host//seg?a=1").unwrap();
/// assert_eq!(render_url(&parsed), "https://host/seg?a=1");
/// ```
pub fn render_url(url: &ParsedUrl) -> String {
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PathSegment, Primitive};

    #[test]
    fn test_render_empty() {
        assert_eq!(render_url(&ParsedUrl::default()), "");
    }

    #[test]
    fn test_render_all_parts() {
        let url = ParsedUrl {
            scheme: "ws".to_string(),
            hostname: "github.com".to_string(),
            segments: vec![
                PathSegment::literal("ikeohachidi"),
                PathSegment::placeholder("repo"),
                PathSegment::literal(Primitive::Absent),
                PathSegment::literal(7),
            ],
            queries: vec![
                ("hello".to_string(), Primitive::from("world")),
                ("flag".to_string(), Primitive::Bool(false)),
            ],
        };

        assert_eq!(
            render_url(&url),
            "ws://github.com/ikeohachidi/{repo}/7?hello=world&flag=false"
        );
    }

    #[test]
    fn test_render_without_hostname() {
        let url = ParsedUrl {
            scheme: "aaa".to_string(),
            segments: vec![PathSegment::literal("settings")],
            ..ParsedUrl::default()
        };
        assert_eq!(render_url(&url), "aaa:///settings");
    }
}
