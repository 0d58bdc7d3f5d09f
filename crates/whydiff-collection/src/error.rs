//! Error types for the collection crate.
//!
//! Diffs never fail; only building a [`crate::MapValue`] from loose pairs can.

use crate::value::Kind;

/// Errors that can occur while constructing collection values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// A key does not have the map's declared key type.
    #[error("key type mismatch: map keys are {expected}, got {actual}")]
    KeyKind { expected: Kind, actual: Kind },
}

/// Convenience alias for collection results.
pub type CollectionResult<T> = Result<T, CollectionError>;
