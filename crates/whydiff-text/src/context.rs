//! Inline context window around a divergence point.
//!
//! Output is always `"{got} vs {want}"`. When both inputs fit inside
//! `2 * window + 1` units they are shown verbatim; otherwise each side is cut
//! to `[position - window, position + window)` with `...` marking the cut
//! ends. The divergent unit itself is always part of the excerpt.

use whydiff_types::limits::ELLIPSIS;

/// A unit of text the window can slice and render.
pub trait Unit: Sized {
    /// Render a run of units for display.
    fn render(units: &[Self]) -> String;
}

impl Unit for u8 {
    // A cut through a multi-byte sequence shows a replacement character.
    fn render(units: &[Self]) -> String {
        String::from_utf8_lossy(units).into_owned()
    }
}

impl Unit for char {
    fn render(units: &[Self]) -> String {
        units.iter().collect()
    }
}

/// Build the `"{got} vs {want}"` preview around `position`.
///
/// Non-positive window sizes shrink the excerpt to the divergent unit.
pub fn window<T: Unit>(got: &[T], want: &[T], position: usize, window_size: isize) -> String {
    let radius = usize::try_from(window_size).unwrap_or(0);
    let span = radius.saturating_mul(2).saturating_add(1);

    if got.len() <= span && want.len() <= span {
        return format!("{} vs {}", T::render(got), T::render(want));
    }

    format!(
        "{} vs {}",
        excerpt(got, position, radius),
        excerpt(want, position, radius)
    )
}

fn excerpt<T: Unit>(units: &[T], position: usize, radius: usize) -> String {
    let len = units.len();
    let start = position.saturating_sub(radius).min(len);
    let end = position.saturating_add(radius.max(1)).min(len);

    let mut out = String::new();
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    out.push_str(&T::render(&units[start..end]));
    if end < len {
        out.push_str(ELLIPSIS);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use whydiff_types::limits::DEFAULT_WINDOW_SIZE;

    #[test]
    fn short_inputs_are_verbatim() {
        let out = window(b"hello".as_slice(), b"help".as_slice(), 3, 5);
        assert_eq!(out, "hello vs help");
    }

    #[test]
    fn verbatim_cutoff_is_twice_the_window_plus_one() {
        let out = window(b"abcde".as_slice(), b"abXde".as_slice(), 2, 2);
        assert_eq!(out, "abcde vs abXde");

        let out = window(b"abcdef".as_slice(), b"abXdef".as_slice(), 2, 2);
        assert_eq!(out, "abcd... vs abXd...");
    }

    #[test]
    fn default_window_cutoff() {
        let span = 2 * DEFAULT_WINDOW_SIZE + 1;
        let got = "a".repeat(span);
        let want = format!("{}b", "a".repeat(span - 1));
        let out = window(got.as_bytes(), want.as_bytes(), span - 1, DEFAULT_WINDOW_SIZE as isize);
        assert_eq!(out, format!("{got} vs {want}"));

        let got = format!("{got}a");
        let want = format!("{want}a");
        let out = window(got.as_bytes(), want.as_bytes(), span - 1, DEFAULT_WINDOW_SIZE as isize);
        assert!(out.starts_with("..."));
        assert!(!out.contains(&got));
    }

    #[test]
    fn long_inputs_get_both_markers() {
        let got = b"0123456789abcdefghij";
        let want = b"0123456789ABCDEFGHIJ";
        let out = window(got.as_slice(), want.as_slice(), 10, 3);
        assert_eq!(out, "...789abc... vs ...789ABC...");
    }

    #[test]
    fn no_prefix_marker_at_start() {
        let got = b"xbcdefghijklmnop";
        let want = b"ybcdefghijklmnop";
        let out = window(got.as_slice(), want.as_slice(), 0, 2);
        assert_eq!(out, "xb... vs yb...");
    }

    #[test]
    fn shorter_side_ends_without_suffix() {
        let got = b"abcdefghij";
        let want = b"abcdefghijKLMNOPQRST";
        let out = window(got.as_slice(), want.as_slice(), 10, 3);
        assert_eq!(out, "...hij vs ...hijKLM...");
    }

    #[test]
    fn zero_window_shows_divergent_unit() {
        let out = window(b"abcdef".as_slice(), b"abXdef".as_slice(), 2, 0);
        assert_eq!(out, "...c... vs ...X...");
    }

    #[test]
    fn negative_window_does_not_panic() {
        let out = window(b"abcdef".as_slice(), b"abXdef".as_slice(), 2, -7);
        assert_eq!(out, "...c... vs ...X...");
    }

    #[test]
    fn position_past_end_is_clamped() {
        let out = window(b"abcdef".as_slice(), b"abc".as_slice(), 40, 1);
        assert_eq!(out, "... vs ...");
    }

    #[test]
    fn char_window_respects_codepoints() {
        let got: Vec<char> = "ααααααβγδ".chars().collect();
        let want: Vec<char> = "ααααααXγδ".chars().collect();
        let out = window(&got, &want, 6, 1);
        assert_eq!(out, "...αβ... vs ...αX...");
    }

    #[test]
    fn byte_window_cut_mid_codepoint_is_lossy() {
        let got = "ééééé".as_bytes();
        let want = "éééééx".as_bytes();
        let out = window(got, want, 2, 1);
        assert!(out.contains('\u{fffd}'));
    }
}
