//! Bounded content dumps for failure details.

/// A rendered preview and whether it omits elements.
pub(crate) struct Preview {
    pub text: String,
    pub truncated: bool,
}

/// Render up to `limit` of `total` items as `[a b c]`.
///
/// When items are omitted the list ends with `...` and a note naming the
/// true count.
pub(crate) fn list_preview<I>(items: I, total: usize, limit: usize) -> Preview
where
    I: IntoIterator<Item = String>,
{
    let shown: Vec<String> = items.into_iter().take(limit).collect();
    let truncated = total > shown.len();

    let text = if truncated {
        let head = if shown.is_empty() {
            "...".to_string()
        } else {
            format!("{} ...", shown.join(" "))
        };
        format!("[{head}] (showing {} of {total} elements)", shown.len())
    } else {
        format!("[{}]", shown.join(" "))
    };

    Preview { text, truncated }
}

/// Render up to `limit` codepoints of `text` as a quoted string.
pub(crate) fn text_preview(text: &str, limit: usize) -> Preview {
    let total = text.chars().count();
    if total <= limit {
        return Preview {
            text: format!("{text:?}"),
            truncated: false,
        };
    }
    let head: String = text.chars().take(limit).collect();
    Preview {
        text: format!("{head:?}... (showing {limit} of {total} characters)"),
        truncated: true,
    }
}
