//! Length diffs over sequences, maps, and strings.
//!
//! Sequences count elements, maps count entries, strings count codepoints.

use whydiff_types::limits::LENGTH_PREVIEW;
use whydiff_types::{CollectionDiffResult, CollectionType};

use crate::container::Container;
use crate::format::{list_preview, text_preview, Preview};
use crate::value::Value;

/// Check whether `container` has exactly `expected` elements.
pub fn length_diff(container: &Value, expected: usize) -> CollectionDiffResult {
    let shape = Container::classify(container);
    let collection_type = shape.collection_type();

    let actual = match shape {
        Container::Nil => {
            return CollectionDiffResult::diff(
                collection_type,
                "container is nil",
                format!("cannot measure a nil container, want length {expected}"),
            );
        }
        Container::Unsupported(kind) => {
            return CollectionDiffResult::diff(
                collection_type,
                format!("unsupported container type {kind}"),
                format!("{container} has no length"),
            );
        }
        Container::Sequence(items) => items.len(),
        Container::Map(map) => map.len(),
        Container::Text(text) => text.chars().count(),
    };

    if actual == expected {
        return CollectionDiffResult::none(collection_type);
    }

    let preview = content_preview(shape);
    CollectionDiffResult::diff(
        collection_type,
        format!("length mismatch: got {actual}, want {expected}"),
        format!("content: {}", preview.text),
    )
    .truncated(preview.truncated)
}

fn content_preview(shape: Container<'_>) -> Preview {
    match shape {
        Container::Sequence(items) => {
            list_preview(items.iter().map(ToString::to_string), items.len(), LENGTH_PREVIEW)
        }
        Container::Map(map) => list_preview(
            map.sorted_entries()
                .into_iter()
                .map(|(k, v)| format!("{k}:{v}")),
            map.len(),
            LENGTH_PREVIEW,
        ),
        Container::Text(text) => text_preview(text, LENGTH_PREVIEW),
        Container::Nil | Container::Unsupported(_) => list_preview(Vec::new(), 0, LENGTH_PREVIEW),
    }
}
