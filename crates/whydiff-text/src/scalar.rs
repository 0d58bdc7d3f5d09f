//! First-divergence search over flat sequences.
//!
//! The byte variant reports raw storage offsets; the codepoint variant
//! decodes first, so a multi-byte character counts as one unit. Neither
//! normalizes Unicode: a precomposed letter and its decomposed form differ
//! at the first codepoint where they disagree.

use whydiff_types::limits::DEFAULT_WINDOW_SIZE;
use whydiff_types::DiffResult;

use crate::context::window;
use crate::segment::codepoints;

/// Index of the first unit where `got` and `want` differ.
///
/// When one input is a prefix of the other the divergence is where the
/// shorter one ends. Returns `None` for equal inputs.
pub fn first_divergence<T: PartialEq>(got: &[T], want: &[T]) -> Option<usize> {
    if got == want {
        return None;
    }
    let shared = got.len().min(want.len());
    let mismatch = got.iter().zip(want).position(|(g, w)| g != w);
    Some(mismatch.unwrap_or(shared))
}

/// Compare two byte strings with the default context window.
pub fn compare_bytes(got: &[u8], want: &[u8]) -> DiffResult {
    compare_bytes_with_context(got, want, DEFAULT_WINDOW_SIZE as isize)
}

/// Compare two byte strings, previewing `window_size` bytes on each side of
/// the divergence.
pub fn compare_bytes_with_context(got: &[u8], want: &[u8], window_size: isize) -> DiffResult {
    match first_divergence(got, want) {
        None => DiffResult::none(),
        Some(position) => DiffResult::at(
            position,
            format!("string values differ at position {position}"),
            window(got, want, position, window_size),
        ),
    }
}

/// Compare two strings codepoint by codepoint with the default window.
pub fn compare_codepoints(got: &str, want: &str) -> DiffResult {
    compare_codepoints_with_context(got, want, DEFAULT_WINDOW_SIZE as isize)
}

/// Compare two strings codepoint by codepoint, previewing `window_size`
/// codepoints on each side of the divergence.
pub fn compare_codepoints_with_context(got: &str, want: &str, window_size: isize) -> DiffResult {
    if got == want {
        return DiffResult::none();
    }

    let got_chars = codepoints(got);
    let want_chars = codepoints(want);
    match first_divergence(&got_chars, &want_chars) {
        None => DiffResult::none(),
        Some(position) => DiffResult::at(
            position,
            format!("string values differ at codepoint {position}"),
            window(&got_chars, &want_chars, position, window_size),
        ),
    }
}
