//! Foundation types for whydiff.
//!
//! Every comparison in the engine produces one of the value objects defined
//! here. They are created fresh per call, never shared, and carry enough
//! text to explain a failing assertion without access to the inputs.
//!
//! # Key Types
//!
//! - [`DiffResult`] -- Scalar or line-level outcome with an optional divergence position
//! - [`EnhancedDiffResult`] -- Multi-line outcome with context, unified, and side-by-side views
//! - [`CollectionDiffResult`] / [`CollectionType`] -- Containment and length outcomes
//! - [`limits`] -- Named thresholds shared by every crate

pub mod collection;
pub mod limits;
pub mod result;

pub use collection::{CollectionDiffResult, CollectionType};
pub use result::{DiffResult, EnhancedDiffResult};
