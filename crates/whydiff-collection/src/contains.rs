//! Containment diffs: is `item` an element, key, or substring of a container?

use whydiff_types::limits::CONTAINS_PREVIEW;
use whydiff_types::{CollectionDiffResult, CollectionType};

use crate::container::Container;
use crate::format::list_preview;
use crate::value::{MapValue, Value};

/// Check whether `container` contains `item`.
///
/// Sequences match elements by deep equality, maps match keys (after checking
/// the item has the map's key type), and strings accept a substring, a
/// character, or a byte.
pub fn contains_diff(container: &Value, item: &Value) -> CollectionDiffResult {
    match Container::classify(container) {
        Container::Nil => CollectionDiffResult::diff(
            CollectionType::Nil,
            "container is nil",
            format!("cannot search for {item} in a nil container"),
        ),
        Container::Sequence(items) => sequence_contains(items, item),
        Container::Map(map) => map_contains(map, item),
        Container::Text(text) => text_contains(text, item),
        Container::Unsupported(kind) => CollectionDiffResult::diff(
            CollectionType::Unsupported,
            format!("unsupported container type {kind}"),
            format!("cannot search for {item} in {container}"),
        ),
    }
}

fn sequence_contains(items: &[Value], item: &Value) -> CollectionDiffResult {
    if items.iter().any(|e| e == item) {
        return CollectionDiffResult::none(CollectionType::Slice);
    }

    let preview = list_preview(
        items.iter().map(ToString::to_string),
        items.len(),
        CONTAINS_PREVIEW,
    );
    CollectionDiffResult::diff(
        CollectionType::Slice,
        format!("sequence does not contain {item}"),
        format!("content: {}\nmissing: {item}", preview.text),
    )
    .truncated(preview.truncated)
}

fn map_contains(map: &MapValue, item: &Value) -> CollectionDiffResult {
    if item.kind() != map.key_kind() {
        return CollectionDiffResult::diff(
            CollectionType::Map,
            format!(
                "key type mismatch: map keys are {}, got {}",
                map.key_kind(),
                item.kind()
            ),
            format!("cannot look up {item} in a map keyed by {}", map.key_kind()),
        );
    }
    if map.get(item).is_some() {
        return CollectionDiffResult::none(CollectionType::Map);
    }

    let keys: Vec<String> = map.sorted_keys().iter().map(|k| k.to_string()).collect();
    CollectionDiffResult::diff(
        CollectionType::Map,
        format!("map does not contain key {item}"),
        format!("keys: [{}]\nmissing: {item}", keys.join(" ")),
    )
}

fn text_contains(text: &str, item: &Value) -> CollectionDiffResult {
    let found = match item {
        Value::Str(needle) => text.contains(needle.as_str()),
        Value::Char(c) => text.contains(*c),
        Value::Byte(b) => text.as_bytes().contains(b),
        other => {
            return CollectionDiffResult::diff(
                CollectionType::String,
                format!("unsupported item type {} for string containment", other.kind()),
                format!("expected a string, char, or byte, got {other}"),
            );
        }
    };
    if found {
        return CollectionDiffResult::none(CollectionType::String);
    }

    CollectionDiffResult::diff(
        CollectionType::String,
        format!("string does not contain {item}"),
        format!("content: {text:?}\nmissing: {item}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Kind;
    use proptest::prelude::*;

    #[test]
    fn sequence_hit_is_no_diff() {
        let r = contains_diff(&vec![1, 2, 3].into(), &2.into());
        assert_eq!(r, CollectionDiffResult::none(CollectionType::Slice));
    }

    #[test]
    fn sequence_miss_lists_content() {
        let r = contains_diff(&vec![1, 2, 3].into(), &9.into());
        assert!(r.has_diff);
        assert_eq!(r.summary, "sequence does not contain 9");
        assert!(r.detail.contains("[1 2 3]"));
        assert!(r.detail.contains("missing: 9"));
        assert!(!r.truncated);
    }

    #[test]
    fn sequence_preview_boundary() {
        let at_limit: Value = (1..=CONTAINS_PREVIEW as i64).collect::<Vec<_>>().into();
        let r = contains_diff(&at_limit, &42.into());
        assert!(!r.truncated);
        assert!(r.detail.starts_with("content: [1 2 3 4 5]\n"));
        assert!(!r.detail.contains("showing"));

        let over: Value = (1..=CONTAINS_PREVIEW as i64 + 1).collect::<Vec<_>>().into();
        let r = contains_diff(&over, &42.into());
        assert!(r.truncated);
        assert!(r.detail.contains("(showing 5 of 6 elements)"));
    }

    #[test]
    fn sequence_miss_is_bounded() {
        let r = contains_diff(&(1..=8).map(i64::from).collect::<Vec<_>>().into(), &42.into());
        assert!(r.truncated);
        assert!(r.detail.contains("[1 2 3 4 5 ...] (showing 5 of 8 elements)"));
    }

    #[test]
    fn sequence_uses_deep_equality() {
        let nested: Value = vec![vec![1, 2], vec![3]].into();
        assert!(!contains_diff(&nested, &vec![3].into()).has_diff);
        assert!(contains_diff(&nested, &vec![2, 1].into()).has_diff);
    }

    #[test]
    fn map_hit_and_sorted_miss() {
        let map = Value::Map(MapValue::from_pairs(Kind::Str, [("b", 2), ("c", 3), ("a", 1)]).unwrap());
        assert!(!contains_diff(&map, &"a".into()).has_diff);

        let r = contains_diff(&map, &"z".into());
        assert_eq!(r.collection_type, CollectionType::Map);
        assert_eq!(r.summary, "map does not contain key \"z\"");
        assert!(r.detail.starts_with("keys: [\"a\" \"b\" \"c\"]"));
    }

    #[test]
    fn map_key_type_mismatch_is_its_own_diff() {
        let map = Value::Map(MapValue::from_pairs(Kind::Str, [("a", 1)]).unwrap());
        let r = contains_diff(&map, &1.into());
        assert!(r.has_diff);
        assert_eq!(r.summary, "key type mismatch: map keys are string, got int");
        assert!(!r.summary.contains("does not contain"));
    }

    #[test]
    fn empty_map_still_checks_key_type() {
        let map = Value::Map(MapValue::new(Kind::Int));
        assert!(contains_diff(&map, &"x".into()).summary.starts_with("key type mismatch"));
        assert_eq!(contains_diff(&map, &7.into()).summary, "map does not contain key 7");
    }

    #[test]
    fn string_accepts_substring_char_and_byte() {
        let text: Value = "hello world".into();
        assert!(!contains_diff(&text, &"lo w".into()).has_diff);
        assert!(!contains_diff(&text, &'w'.into()).has_diff);
        assert!(!contains_diff(&text, &b'h'.into()).has_diff);
        assert!(contains_diff(&text, &'z'.into()).has_diff);
    }

    #[test]
    fn string_search_is_literal() {
        let r = contains_diff(&"abc".into(), &"a.c".into());
        assert!(r.has_diff);
        assert_eq!(r.summary, "string does not contain \"a.c\"");
        assert_eq!(r.collection_type, CollectionType::String);
    }

    #[test]
    fn string_rejects_other_item_types() {
        let r = contains_diff(&"123".into(), &123.into());
        assert!(r.has_diff);
        assert_eq!(r.summary, "unsupported item type int for string containment");
    }

    #[test]
    fn nil_container_never_panics() {
        let r = contains_diff(&Value::Nil, &1.into());
        assert!(r.has_diff);
        assert_eq!(r.collection_type, CollectionType::Nil);
        assert_eq!(r.summary, "container is nil");
    }

    #[test]
    fn scalar_container_is_unsupported() {
        let r = contains_diff(&Value::Bool(true), &true.into());
        assert_eq!(r.collection_type, CollectionType::Unsupported);
        assert_eq!(r.summary, "unsupported container type bool");
    }

    proptest! {
        #[test]
        fn sequence_contains_its_own_elements(items in proptest::collection::vec(any::<i64>(), 1..20),
                                              pick in any::<prop::sample::Index>()) {
            let needle = items[pick.index(items.len())];
            let container: Value = items.into();
            prop_assert!(!contains_diff(&container, &needle.into()).has_diff);
        }

        #[test]
        fn string_contains_its_substrings(text in "[a-z]{1,30}", start in 0usize..30, len in 0usize..30) {
            let start = start.min(text.len());
            let end = (start + len).min(text.len());
            let needle = &text[start..end];
            prop_assert!(!contains_diff(&text.as_str().into(), &needle.into()).has_diff);
        }
    }
}
