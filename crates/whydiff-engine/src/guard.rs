//! Performance guard: bounds the work done by multi-line rendering.
//!
//! Two fixed thresholds apply before any line-level work:
//!
//! - inputs over `max_input_bytes` are not segmented at all;
//! - inputs over `max_lines` lines are cut to their first `max_lines` lines.

use std::fmt;

use tracing::debug;
use whydiff_text::{line_count, split_lines_prefix, Line};

use crate::config::DiffConfig;

/// An input exceeded the byte cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeExceeded {
    pub got_bytes: usize,
    pub want_bytes: usize,
    pub limit: usize,
}

impl fmt::Display for SizeExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "input too large for line diff: got {} bytes, want {} bytes (limit {} bytes)",
            self.got_bytes, self.want_bytes, self.limit
        )
    }
}

/// Only a prefix of the lines was kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Truncation {
    pub got_lines: usize,
    pub want_lines: usize,
    pub limit: usize,
}

impl Truncation {
    /// Notice appended to the context view.
    pub fn notice(&self, divergence_found: bool) -> String {
        let mut notice = format!(
            "[truncated: compared only the first {} lines; got {} lines, want {} lines]",
            self.limit, self.got_lines, self.want_lines
        );
        if !divergence_found {
            notice.push_str(&format!(
                "\n[no difference within the first {} lines; inputs differ further on]",
                self.limit
            ));
        }
        notice
    }
}

/// Segmented inputs that are safe to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bounded<'a> {
    pub got: Vec<Line<'a>>,
    pub want: Vec<Line<'a>>,
    pub truncation: Option<Truncation>,
}

/// What the guard allows the orchestrator to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Guarded<'a> {
    /// Skip line-level work entirely.
    TooLarge(SizeExceeded),
    /// Proceed with the (possibly truncated) lines.
    Lines(Bounded<'a>),
}

/// The byte cap alone. Cheap: no segmentation happens.
pub fn size_exceeded(got: &str, want: &str, config: &DiffConfig) -> Option<SizeExceeded> {
    (got.len() > config.max_input_bytes || want.len() > config.max_input_bytes).then(|| {
        SizeExceeded {
            got_bytes: got.len(),
            want_bytes: want.len(),
            limit: config.max_input_bytes,
        }
    })
}

/// Apply both thresholds to a pair of inputs.
pub fn check<'a>(got: &'a str, want: &'a str, config: &DiffConfig) -> Guarded<'a> {
    if let Some(exceeded) = size_exceeded(got, want, config) {
        debug!(
            got_bytes = exceeded.got_bytes,
            want_bytes = exceeded.want_bytes,
            limit = exceeded.limit,
            "input exceeds size cap, skipping line diff"
        );
        return Guarded::TooLarge(exceeded);
    }

    let got_lines = line_count(got);
    let want_lines = line_count(want);
    let truncation = (got_lines > config.max_lines || want_lines > config.max_lines).then(|| {
        debug!(
            got_lines,
            want_lines,
            limit = config.max_lines,
            "input exceeds line cap, truncating"
        );
        Truncation {
            got_lines,
            want_lines,
            limit: config.max_lines,
        }
    });

    Guarded::Lines(Bounded {
        got: split_lines_prefix(got, config.max_lines),
        want: split_lines_prefix(want, config.max_lines),
        truncation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use whydiff_types::limits::{MAX_INPUT_BYTES, MAX_LINES};

    fn small_config() -> DiffConfig {
        DiffConfig {
            max_input_bytes: 64,
            max_lines: 3,
            ..DiffConfig::default()
        }
    }

    #[test]
    fn small_inputs_pass_untouched() {
        let Guarded::Lines(b) = check("a\nb", "a\nc", &small_config()) else {
            panic!("expected lines");
        };
        assert_eq!(b.got.len(), 2);
        assert!(b.truncation.is_none());
    }

    #[test]
    fn oversized_input_is_rejected() {
        let big = "x".repeat(65);
        let g = check(&big, "x", &small_config());
        assert_eq!(
            g,
            Guarded::TooLarge(SizeExceeded {
                got_bytes: 65,
                want_bytes: 1,
                limit: 64
            })
        );
    }

    #[test]
    fn boundary_size_is_allowed() {
        let edge = "x".repeat(64);
        assert!(matches!(check(&edge, &edge, &small_config()), Guarded::Lines(_)));
        assert!(size_exceeded(&edge, &edge, &small_config()).is_none());
        assert_eq!(
            size_exceeded("x", &"x".repeat(65), &small_config()).map(|e| e.want_bytes),
            Some(65)
        );
    }

    #[test]
    fn line_cap_boundary() {
        let Guarded::Lines(at_cap) = check("1\n2\n3", "1\n2\n3", &small_config()) else {
            panic!("expected lines");
        };
        assert_eq!(at_cap.got.len(), 3);
        assert!(at_cap.truncation.is_none());

        // The trailing terminator adds an empty fourth line.
        let Guarded::Lines(over) = check("1\n2\n3\n", "1\n2\n3", &small_config()) else {
            panic!("expected lines");
        };
        assert_eq!(over.got.len(), 3);
        assert_eq!(over.truncation.map(|t| t.got_lines), Some(4));
    }

    #[test]
    fn default_limits_at_their_boundaries() {
        let config = DiffConfig::default();

        let at_cap = vec!["x"; MAX_LINES].join("\n");
        let Guarded::Lines(b) = check(&at_cap, &at_cap, &config) else {
            panic!("expected lines");
        };
        assert!(b.truncation.is_none());
        let over = format!("{at_cap}\n");
        let Guarded::Lines(b) = check(&over, &at_cap, &config) else {
            panic!("expected lines");
        };
        assert_eq!(b.truncation.map(|t| t.got_lines), Some(MAX_LINES + 1));

        let edge = "x".repeat(MAX_INPUT_BYTES);
        assert!(matches!(check(&edge, "x", &config), Guarded::Lines(_)));
        let big = "x".repeat(MAX_INPUT_BYTES + 1);
        assert!(matches!(check(&big, "x", &config), Guarded::TooLarge(_)));
    }

    #[test]
    fn long_input_is_truncated_to_prefix() {
        let Guarded::Lines(b) = check("1\n2\n3\n4\n5", "1\n2", &small_config()) else {
            panic!("expected lines");
        };
        assert_eq!(b.got.len(), 3);
        assert_eq!(b.want.len(), 2);
        let t = b.truncation.unwrap();
        assert_eq!((t.got_lines, t.want_lines, t.limit), (5, 2, 3));
    }

    #[test]
    fn notice_mentions_hidden_divergence() {
        let t = Truncation {
            got_lines: 10,
            want_lines: 12,
            limit: 3,
        };
        assert!(t.notice(true).starts_with("[truncated: compared only the first 3 lines"));
        assert!(!t.notice(true).contains("no difference"));
        assert!(t.notice(false).contains("no difference within the first 3 lines"));
    }
}
