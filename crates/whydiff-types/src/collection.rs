//! Containment and length comparison outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Shape of the container a collection diff was computed over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionType {
    /// An ordered sequence.
    Slice,
    /// A key/value map.
    Map,
    /// A string searched as a character container.
    String,
    /// An absent container.
    Nil,
    /// A value that is not a container.
    Unsupported,
}

impl fmt::Display for CollectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CollectionType::Slice => "slice",
            CollectionType::Map => "map",
            CollectionType::String => "string",
            CollectionType::Nil => "nil",
            CollectionType::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// Outcome of a containment or length check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionDiffResult {
    /// Whether the check failed.
    pub has_diff: bool,
    /// One-line explanation.
    pub summary: String,
    /// Bounded dump of the container contents.
    pub detail: String,
    /// Shape the container was classified as.
    pub collection_type: CollectionType,
    /// Whether `detail` omits some elements.
    pub truncated: bool,
}

impl CollectionDiffResult {
    /// A passing check: empty summary and detail.
    pub fn none(collection_type: CollectionType) -> Self {
        Self {
            has_diff: false,
            summary: String::new(),
            detail: String::new(),
            collection_type,
            truncated: false,
        }
    }

    /// A failing check.
    pub fn diff(
        collection_type: CollectionType,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            has_diff: true,
            summary: summary.into(),
            detail: detail.into(),
            collection_type,
            truncated: false,
        }
    }

    /// Mark the detail as truncated.
    pub fn truncated(mut self, truncated: bool) -> Self {
        self.truncated = truncated;
        self
    }
}
