//! Presentation renderers for multi-line differences.
//!
//! Both renderers take inputs already split into lines (without
//! terminators) and return plain text.
//!
//! # Key Types
//!
//! - [`Hunk`] / [`HunkStrategy`] -- Blocks of removed and added lines
//! - [`unified_diff`] -- Patch-style output with `--- got` / `+++ want` headers
//! - [`side_by_side`] -- Fixed-width `Got | Want` table

pub mod side_by_side;
pub mod unified;

pub use side_by_side::{side_by_side, side_by_side_with_width, MIN_COLUMN_WIDTH};
pub use unified::{compute_hunks, render_hunks, unified_diff, unified_diff_with, Hunk, HunkStrategy};
