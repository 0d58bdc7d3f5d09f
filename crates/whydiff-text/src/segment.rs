//! Segmentation of text into codepoints and lines.
//!
//! Lines are split on `\n` only. `\r` stays part of the line content, so
//! `\r\n` and `\n` inputs never compare equal. A trailing `\n` produces an
//! implicit empty final line, which makes `"a\n"` one line longer than `"a"`.

/// One line of a multi-line input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line content without the `\n` terminator.
    pub content: &'a str,
    /// Whether a `\n` followed this line in the input.
    pub terminated: bool,
    /// Byte offset of the line start in the input.
    pub offset: usize,
}

impl Line<'_> {
    /// Byte length including the terminator, if any.
    pub fn len_with_terminator(&self) -> usize {
        self.content.len() + usize::from(self.terminated)
    }
}

/// Split `text` into lines.
///
/// The empty string is a single empty line.
pub fn split_lines(text: &str) -> Vec<Line<'_>> {
    split_lines_prefix(text, usize::MAX)
}

/// Split at most the first `limit` lines of `text`.
pub fn split_lines_prefix(text: &str, limit: usize) -> Vec<Line<'_>> {
    let mut lines = Vec::with_capacity(line_count(text).min(limit));
    let mut offset = 0;
    let mut pieces = text.split('\n').peekable();

    while let Some(content) = pieces.next() {
        if lines.len() == limit {
            break;
        }
        let terminated = pieces.peek().is_some();
        let line = Line {
            content,
            terminated,
            offset,
        };
        offset += line.len_with_terminator();
        lines.push(line);
    }

    lines
}

/// Number of lines [`split_lines`] would produce, without allocating.
pub fn line_count(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Decode `text` into Unicode scalar values. No normalization is applied.
pub fn codepoints(text: &str) -> Vec<char> {
    text.chars().collect()
}
