//! Orderable collections
//!
//! - Sort values with missing-last comparison
//! - Field specs with a `-` prefix for descending
//! - The [`Orderable`] seam plus an in-memory implementation for `Vec`

pub mod keys;
pub mod orderable;

pub use keys::SortValue;
pub use orderable::{FieldOrder, Orderable, SortableRecord};
