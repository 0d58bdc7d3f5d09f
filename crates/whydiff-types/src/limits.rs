//! Fixed thresholds used across the engine.
//!
//! These are the defaults; `whydiff-engine`'s `DiffConfig` can override the
//! ones that bound work or layout.

/// Inputs larger than this (in bytes) skip line-level detection entirely.
pub const MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Inputs with more lines than this are processed as a bounded prefix.
pub const MAX_LINES: usize = 1000;

/// Width of each cell in the side-by-side table, in characters.
pub const COLUMN_WIDTH: usize = 29;

/// Number of elements shown when a sequence does not contain an item.
pub const CONTAINS_PREVIEW: usize = 5;

/// Number of elements shown when a collection has the wrong length.
pub const LENGTH_PREVIEW: usize = 10;

/// Units shown on each side of a divergence in the inline context window.
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Lines shown before and after the divergent line in the line context window.
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// Marker for text cut off by a window or a table cell.
pub const ELLIPSIS: &str = "...";

/// Stand-in for the side-by-side table when the size guard fires.
pub const TOO_LARGE_PLACEHOLDER: &str = "[side-by-side diff omitted: input too large]";
