//! Line-level divergence: which line differs first, and where in it.

use whydiff_types::limits::DEFAULT_WINDOW_SIZE;
use whydiff_types::DiffResult;

use crate::context::window;
use crate::scalar::first_divergence;
use crate::segment::{codepoints, split_lines, Line};

/// Why two multi-line inputs were found to differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DivergenceCause {
    /// A line present on both sides has different content.
    Content,
    /// Every shared line matches but one side has more lines.
    LineCount,
}

/// The first divergent line between two segmented inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineDivergence {
    /// 0-based index of the divergent line.
    pub index: usize,
    pub cause: DivergenceCause,
}

impl LineDivergence {
    /// 1-indexed line number.
    pub fn line_number(&self) -> usize {
        self.index + 1
    }
}

/// Find the first line where `got` and `want` disagree.
pub fn find_line_divergence(got: &[Line<'_>], want: &[Line<'_>]) -> Option<LineDivergence> {
    if let Some(index) = got
        .iter()
        .zip(want)
        .position(|(g, w)| g.content != w.content)
    {
        return Some(LineDivergence {
            index,
            cause: DivergenceCause::Content,
        });
    }

    (got.len() != want.len()).then(|| LineDivergence {
        index: got.len().min(want.len()),
        cause: DivergenceCause::LineCount,
    })
}

/// Compare two multi-line strings.
///
/// `position` is the byte offset where the divergent line starts: the sum of
/// the preceding lines' lengths plus one per terminator.
pub fn compare_lines(got: &str, want: &str) -> DiffResult {
    if got == want {
        return DiffResult::none();
    }

    let got_lines = split_lines(got);
    let want_lines = split_lines(want);
    let Some(divergence) = find_line_divergence(&got_lines, &want_lines) else {
        return DiffResult::none();
    };

    let line_number = divergence.line_number();
    // Past the last line of `got`, count its missing terminator too.
    let position = got_lines
        .get(divergence.index)
        .map_or(got.len() + 1, |l| l.offset);

    let got_line = got_lines.get(divergence.index).map(|l| l.content);
    let want_line = want_lines.get(divergence.index).map(|l| l.content);

    let (summary, context) = match divergence.cause {
        DivergenceCause::LineCount => (
            format!(
                "strings differ in length: got {} lines, want {} lines",
                got_lines.len(),
                want_lines.len()
            ),
            format!(
                "line {line_number}: {} vs {}",
                describe_line(got_line),
                describe_line(want_line)
            ),
        ),
        DivergenceCause::Content => {
            let got_chars = codepoints(got_line.unwrap_or_default());
            let want_chars = codepoints(want_line.unwrap_or_default());
            let column = first_divergence(&got_chars, &want_chars).unwrap_or(0);
            (
                format!("strings differ at line {line_number}"),
                format!(
                    "line {line_number}, column {}: {}",
                    column + 1,
                    window(&got_chars, &want_chars, column, DEFAULT_WINDOW_SIZE as isize)
                ),
            )
        }
    };

    DiffResult::at(position, summary, context).with_line(line_number)
}

fn describe_line(line: Option<&str>) -> String {
    match line {
        Some(content) => format!("{content:?}"),
        None => "<no line>".to_string(),
    }
}
