//! Core URL builder functionality.
//!
//! This module contains the main builder operations:
//! - Parsing URL strings into structured parts
//! - Mutating and reading those parts through [`UrlBuilder`]
//! - Rendering the parts back into a URL string

pub mod builder;
pub mod parser;
pub mod render;

// Re-export main functionality
pub use builder::UrlBuilder;
pub use parser::{parse_query_string, parse_segment, parse_url};
pub use render::render_url;
