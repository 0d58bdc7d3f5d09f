//! Container shape classification.

use whydiff_types::CollectionType;

use crate::value::{Kind, MapValue, Value};

/// The shape of a container, resolved once per diff call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Container<'a> {
    /// Absent container.
    Nil,
    /// Ordered elements.
    Sequence(&'a [Value]),
    /// Key/value entries.
    Map(&'a MapValue),
    /// A string searched as a character container.
    Text(&'a str),
    /// A scalar with no notion of membership or length.
    Unsupported(Kind),
}

impl<'a> Container<'a> {
    /// Classify `value` by shape.
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Nil => Container::Nil,
            Value::Seq(items) => Container::Sequence(items),
            Value::Map(map) => Container::Map(map),
            Value::Str(s) => Container::Text(s),
            other => Container::Unsupported(other.kind()),
        }
    }

    /// The tag reported in a [`whydiff_types::CollectionDiffResult`].
    pub fn collection_type(&self) -> CollectionType {
        match self {
            Container::Nil => CollectionType::Nil,
            Container::Sequence(_) => CollectionType::Slice,
            Container::Map(_) => CollectionType::Map,
            Container::Text(_) => CollectionType::String,
            Container::Unsupported(_) => CollectionType::Unsupported,
        }
    }
}
