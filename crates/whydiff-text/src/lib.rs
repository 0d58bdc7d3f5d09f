//! Text-level divergence detection for whydiff.
//!
//! Splits text into bytes, codepoints, or lines, finds the first unit where
//! two inputs disagree, and builds a bounded preview around that point.
//!
//! # Key Functions
//!
//! - [`split_lines`] -- `\n`-only segmentation that counts a trailing empty line
//! - [`compare_bytes`] / [`compare_codepoints`] -- First divergent byte or codepoint
//! - [`window`] -- Inline context window with `...` truncation markers
//! - [`compare_lines`] -- First divergent line with a column-level preview

pub mod context;
pub mod lines;
pub mod scalar;
pub mod segment;

pub use context::{window, Unit};
pub use lines::{compare_lines, find_line_divergence, DivergenceCause, LineDivergence};
pub use scalar::{
    compare_bytes, compare_bytes_with_context, compare_codepoints,
    compare_codepoints_with_context, first_divergence,
};
pub use segment::{codepoints, line_count, split_lines, split_lines_prefix, Line};
