//! Multi-line orchestrator: locates the divergent line and builds every view.
//!
//! Flow for a single call:
//!
//! 1. Identical inputs return early with only the side-by-side baseline.
//! 2. The [`guard`](crate::guard) may reject oversized inputs outright.
//! 3. Long inputs are cut to a line prefix and a notice is appended.
//! 4. Line diff, line context window, unified diff, side-by-side table.

use tracing::debug;
use whydiff_render::{side_by_side_with_width, unified_diff_with};
use whydiff_text::{find_line_divergence, split_lines_prefix, Line};
use whydiff_types::limits::TOO_LARGE_PLACEHOLDER;
use whydiff_types::EnhancedDiffResult;

use crate::config::DiffConfig;
use crate::guard::{self, Bounded, Guarded};

/// Compare two multi-line strings and render all views.
///
/// `context_lines` is the number of lines shown before and after the
/// divergent line; negative values are treated as zero.
pub fn compare_enhanced(
    got: &str,
    want: &str,
    context_lines: isize,
    config: &DiffConfig,
) -> EnhancedDiffResult {
    if got == want {
        let lines = contents(&split_lines_prefix(got, config.max_lines));
        return EnhancedDiffResult::identical(side_by_side_with_width(
            &lines,
            &lines,
            config.column_width,
        ));
    }

    match guard::check(got, want, config) {
        Guarded::TooLarge(exceeded) => EnhancedDiffResult {
            has_diff: true,
            line_number: None,
            context_lines: exceeded.to_string(),
            unified_diff: String::new(),
            side_by_side_diff: TOO_LARGE_PLACEHOLDER.to_string(),
        },
        Guarded::Lines(bounded) => render(&bounded, context_lines, config),
    }
}

fn render(bounded: &Bounded<'_>, context_lines: isize, config: &DiffConfig) -> EnhancedDiffResult {
    let radius = usize::try_from(context_lines).unwrap_or(0);
    let divergence = find_line_divergence(&bounded.got, &bounded.want);

    let mut context = divergence
        .map(|d| line_window(&bounded.got, &bounded.want, d.index, radius))
        .unwrap_or_default();
    if let Some(truncation) = &bounded.truncation {
        if !context.is_empty() {
            context.push('\n');
        }
        context.push_str(&truncation.notice(divergence.is_some()));
    }

    let got_lines = contents(&bounded.got);
    let want_lines = contents(&bounded.want);
    debug!(
        line = divergence.map(|d| d.line_number()),
        got_lines = got_lines.len(),
        want_lines = want_lines.len(),
        strategy = ?config.hunk_strategy,
        "rendering multi-line diff"
    );

    EnhancedDiffResult {
        has_diff: true,
        line_number: divergence.map(|d| d.line_number()),
        context_lines: context,
        unified_diff: unified_diff_with(&got_lines, &want_lines, config.hunk_strategy),
        side_by_side_diff: side_by_side_with_width(&got_lines, &want_lines, config.column_width),
    }
}

fn contents<'a>(lines: &[Line<'a>]) -> Vec<&'a str> {
    lines.iter().map(|l| l.content).collect()
}

/// Render `radius` lines around `index` for both sides.
fn line_window(got: &[Line<'_>], want: &[Line<'_>], index: usize, radius: usize) -> String {
    let mut out = String::from("got:\n");
    push_side(&mut out, got, index, radius);
    out.push_str("want:\n");
    push_side(&mut out, want, index, radius);
    // Drop the final newline so notices can be appended uniformly.
    out.pop();
    out
}

fn push_side(out: &mut String, lines: &[Line<'_>], index: usize, radius: usize) {
    let start = index.saturating_sub(radius).min(lines.len());
    let end = index.saturating_add(radius).saturating_add(1).min(lines.len());

    for (i, line) in lines[start..end].iter().enumerate() {
        let number = start + i + 1;
        let marker = if start + i == index { '>' } else { ' ' };
        out.push_str(&format!("{marker}{number:>5} | {}\n", line.content));
    }
    if index >= lines.len() {
        out.push_str(&format!(">{:>5} | <end of input>\n", index + 1));
    }
}
