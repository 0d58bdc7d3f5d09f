//! Scalar, line, and multi-line comparison outcomes.

use serde::{Deserialize, Serialize};

/// Outcome of a scalar (byte / codepoint) or line-level comparison.
///
/// A result without a difference always has `position == None`,
/// `line_number == None`, and empty `summary` and `context`. Build it with
/// [`DiffResult::none`] to keep that shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    /// Whether the inputs differ.
    pub has_diff: bool,
    /// One-line human explanation, e.g. `string values differ at position 3`.
    pub summary: String,
    /// Offset of the first divergent unit (byte or codepoint, per variant).
    pub position: Option<usize>,
    /// Bounded preview of both inputs around the divergence.
    pub context: String,
    /// 1-indexed line of the divergence, only for multi-line comparisons.
    pub line_number: Option<usize>,
}

impl DiffResult {
    /// The result for equal inputs.
    pub fn none() -> Self {
        Self::default()
    }

    /// A difference located at `position`.
    pub fn at(position: usize, summary: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            has_diff: true,
            summary: summary.into(),
            position: Some(position),
            context: context.into(),
            line_number: None,
        }
    }

    /// Attach a 1-indexed line number.
    pub fn with_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }
}

/// Outcome of a multi-line comparison with rendered views.
///
/// `side_by_side_diff` is always populated so callers can render a
/// consistent baseline. `context_lines` and `unified_diff` are only filled
/// when `has_diff` is `true`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancedDiffResult {
    /// Whether the inputs differ.
    pub has_diff: bool,
    /// 1-indexed line of the first divergence, when it could be located.
    pub line_number: Option<usize>,
    /// Line-granularity window around the divergence for both inputs.
    pub context_lines: String,
    /// Patch-style hunks (`--- got` / `+++ want`).
    pub unified_diff: String,
    /// Fixed-width two-column table.
    pub side_by_side_diff: String,
}

impl EnhancedDiffResult {
    /// The result for identical inputs; only the side-by-side baseline is set.
    pub fn identical(side_by_side_diff: String) -> Self {
        Self {
            side_by_side_diff,
            ..Self::default()
        }
    }
}
