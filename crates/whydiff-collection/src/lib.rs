//! Collection diffs for whydiff.
//!
//! Explains why a containment or length check failed for a sequence, a
//! key/value map, or a string treated as a character container. Inputs are
//! modelled as a closed dynamic [`Value`]; each call classifies the
//! container once into a [`Container`] shape and dispatches to one function
//! per shape.
//!
//! # Key Types
//!
//! - [`Value`] / [`MapValue`] / [`Kind`] -- Dynamic container and item model
//! - [`Container`] -- The shape a value was classified as
//! - [`contains_diff`] -- Element, key, or substring containment
//! - [`length_diff`] -- Element, entry, or codepoint count

pub mod container;
pub mod contains;
pub mod error;
mod format;
pub mod length;
pub mod value;

pub use container::Container;
pub use contains::contains_diff;
pub use error::{CollectionError, CollectionResult};
pub use length::length_diff;
pub use value::{Kind, KeyKind, MapValue, Value};
