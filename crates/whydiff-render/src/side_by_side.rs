//! Two-column `Got | Want` table.
//!
//! Every row has the same width: cells are padded to the column width and
//! longer lines are cut with a trailing `...`. The unified and context views
//! keep the full text, so nothing is lost overall.

use std::borrow::Cow;

use whydiff_types::limits::{COLUMN_WIDTH, ELLIPSIS};

/// Narrowest column that still fits one character plus the ellipsis.
pub const MIN_COLUMN_WIDTH: usize = 4;

/// Render the table with the default column width.
pub fn side_by_side(got: &[&str], want: &[&str]) -> String {
    side_by_side_with_width(got, want, COLUMN_WIDTH)
}

/// Render the table with `column_width` characters per cell.
pub fn side_by_side_with_width(got: &[&str], want: &[&str], column_width: usize) -> String {
    let width = column_width.max(MIN_COLUMN_WIDTH);
    let rows = got.len().max(want.len());

    let mut out = String::new();
    push_row(&mut out, "Got", "Want", width);
    out.push_str(&format!("{}-+-{}\n", "-".repeat(width), "-".repeat(width)));

    for i in 0..rows {
        let left = got.get(i).copied().unwrap_or_default();
        let right = want.get(i).copied().unwrap_or_default();
        push_row(&mut out, left, right, width);
    }

    out
}

fn push_row(out: &mut String, left: &str, right: &str, width: usize) {
    out.push_str(&format!(
        "{:<width$} | {:<width$}\n",
        fit(left, width),
        fit(right, width),
    ));
}

fn fit(cell: &str, width: usize) -> Cow<'_, str> {
    if cell.chars().count() <= width {
        return Cow::Borrowed(cell);
    }
    let kept: String = cell.chars().take(width - ELLIPSIS.len()).collect();
    Cow::Owned(kept + ELLIPSIS)
}
