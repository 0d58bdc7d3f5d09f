//! Unified (patch-style) diff rendering.
//!
//! The default [`HunkStrategy::Greedy`] walks both inputs with two cursors:
//! equal pairs are skipped, and on a mismatch both cursors advance together
//! until they land on equal lines again. If either side runs out first, the
//! rest of the other side joins the block. This is not a minimal edit
//! script; an insertion can make it report a larger block than necessary.
//!
//! [`HunkStrategy::Myers`] uses `similar`'s Myers implementation to produce
//! tighter blocks in the same output format.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use similar::{capture_diff_slices, Algorithm, DiffTag};

/// How blocks of changed lines are located.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HunkStrategy {
    /// Two-cursor diagonal re-alignment.
    #[default]
    Greedy,
    /// Minimal edit script via the Myers algorithm.
    Myers,
}

/// One contiguous block of changed lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hunk<'a> {
    /// 0-based index of the first removed line in `got`.
    pub got_start: usize,
    /// 0-based index of the first added line in `want`.
    pub want_start: usize,
    /// Lines from `got` in this block.
    pub removed: Vec<&'a str>,
    /// Lines from `want` in this block.
    pub added: Vec<&'a str>,
}

impl<'a> Hunk<'a> {
    fn from_ranges(got: &[&'a str], want: &[&'a str], old: Range<usize>, new: Range<usize>) -> Self {
        Self {
            got_start: old.start,
            want_start: new.start,
            removed: got[old].to_vec(),
            added: want[new].to_vec(),
        }
    }
}

impl fmt::Display for Hunk<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "@@ -{},{} +{},{} @@",
            self.got_start + 1,
            self.removed.len(),
            self.want_start + 1,
            self.added.len()
        )?;
        for line in &self.removed {
            writeln!(f, "-{line}")?;
        }
        for line in &self.added {
            writeln!(f, "+{line}")?;
        }
        Ok(())
    }
}

/// Locate the changed blocks between two line lists.
pub fn compute_hunks<'a>(
    got: &[&'a str],
    want: &[&'a str],
    strategy: HunkStrategy,
) -> Vec<Hunk<'a>> {
    match strategy {
        HunkStrategy::Greedy => greedy_hunks(got, want),
        HunkStrategy::Myers => myers_hunks(got, want),
    }
}

/// Render hunks under `--- got` / `+++ want` headers.
pub fn render_hunks(hunks: &[Hunk<'_>]) -> String {
    let mut out = String::from("--- got\n+++ want\n");
    for hunk in hunks {
        out.push_str(&hunk.to_string());
    }
    out
}

/// Unified diff using the greedy strategy.
pub fn unified_diff(got: &[&str], want: &[&str]) -> String {
    unified_diff_with(got, want, HunkStrategy::Greedy)
}

/// Unified diff using the given strategy.
pub fn unified_diff_with(got: &[&str], want: &[&str], strategy: HunkStrategy) -> String {
    render_hunks(&compute_hunks(got, want, strategy))
}

fn greedy_hunks<'a>(got: &[&'a str], want: &[&'a str]) -> Vec<Hunk<'a>> {
    let mut hunks = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < got.len() || j < want.len() {
        if i < got.len() && j < want.len() && got[i] == want[j] {
            i += 1;
            j += 1;
            continue;
        }

        let (got_start, want_start) = (i, j);
        while i < got.len() && j < want.len() && got[i] != want[j] {
            i += 1;
            j += 1;
        }
        if i >= got.len() || j >= want.len() {
            i = got.len();
            j = want.len();
        }

        hunks.push(Hunk::from_ranges(got, want, got_start..i, want_start..j));
    }

    hunks
}

fn myers_hunks<'a>(got: &[&'a str], want: &[&'a str]) -> Vec<Hunk<'a>> {
    let mut hunks = Vec::new();
    let mut pending: Option<(Range<usize>, Range<usize>)> = None;

    for op in capture_diff_slices(Algorithm::Myers, got, want) {
        let (tag, old, new) = op.as_tag_tuple();
        if tag == DiffTag::Equal {
            if let Some((old, new)) = pending.take() {
                hunks.push(Hunk::from_ranges(got, want, old, new));
            }
            continue;
        }
        pending = Some(match pending.take() {
            Some((o, n)) => (o.start..old.end, n.start..new.end),
            None => (old, new),
        });
    }
    if let Some((old, new)) = pending {
        hunks.push(Hunk::from_ranges(got, want, old, new));
    }

    hunks
}
