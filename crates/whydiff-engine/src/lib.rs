//! Diagnostic diff engine for test assertions.
//!
//! Explains *why* two values differ: where the first divergence is (byte,
//! codepoint, or line), what the inputs look like around it, and how the
//! multi-line inputs line up as a unified diff and a side-by-side table.
//! Collections get containment and length explanations.
//!
//! No function here returns an error or panics on unusual input. Inputs
//! that cannot be compared produce a result with `has_diff == true` and a
//! summary saying why.
//!
//! # Quick Start
//!
//! ```rust
//! use whydiff_engine::{line_diff, scalar_diff, Value, collection_contains_diff};
//!
//! let r = scalar_diff(b"hello", b"help!");
//! assert_eq!(r.position, Some(3));
//!
//! let r = line_diff("a\nb\nc", "a\nx\nc");
//! assert_eq!(r.line_number, Some(2));
//!
//! let r = collection_contains_diff(&Value::from(vec![1, 2, 3]), &Value::from(9));
//! assert!(r.has_diff);
//! ```

pub mod config;
pub mod engine;
pub mod enhanced;
pub mod error;
pub mod guard;

pub use config::DiffConfig;
pub use engine::DiffEngine;
pub use enhanced::compare_enhanced;
pub use error::{ConfigError, ConfigResult};
pub use guard::{Guarded, SizeExceeded, Truncation};

// Re-exports for convenience.
pub use whydiff_collection::{Kind, MapValue, Value};
pub use whydiff_render::HunkStrategy;
pub use whydiff_types::{CollectionDiffResult, CollectionType, DiffResult, EnhancedDiffResult};

use whydiff_text::{
    compare_bytes, compare_bytes_with_context, compare_codepoints, compare_lines,
};

/// First divergent byte between `got` and `want`.
pub fn scalar_diff(got: &[u8], want: &[u8]) -> DiffResult {
    compare_bytes(got, want)
}

/// First divergent codepoint between `got` and `want`.
pub fn scalar_diff_codepoints(got: &str, want: &str) -> DiffResult {
    compare_codepoints(got, want)
}

/// First divergent byte, previewed with `window_size` bytes on each side.
pub fn scalar_diff_with_context(got: &[u8], want: &[u8], window_size: isize) -> DiffResult {
    compare_bytes_with_context(got, want, window_size)
}

/// First divergent line between two multi-line strings.
pub fn line_diff(got: &str, want: &str) -> DiffResult {
    compare_lines(got, want)
}

/// Line context, unified diff, and side-by-side views under default limits.
pub fn enhanced_line_diff(got: &str, want: &str, context_lines: isize) -> EnhancedDiffResult {
    compare_enhanced(got, want, context_lines, &DiffConfig::default())
}

/// Whether `container` holds `item` as an element, key, or substring.
pub fn collection_contains_diff(container: &Value, item: &Value) -> CollectionDiffResult {
    whydiff_collection::contains_diff(container, item)
}

/// Whether `container` has exactly `expected_len` elements.
pub fn collection_length_diff(container: &Value, expected_len: usize) -> CollectionDiffResult {
    whydiff_collection::length_diff(container, expected_len)
}
