//! URL string utilities.
//!
//! This module contains the low-level text handling used by the parser and
//! the builder:
//! - Scheme detection and canonicalisation
//! - Placeholder token matching
//! - Query value decoding

pub mod utils;

// Re-export main functionality
pub use utils::{canonical_scheme, decode_query_value, placeholder_name, split_scheme};
