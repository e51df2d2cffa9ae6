//! The orderable collection seam
//!
//! Auto-sort never compares records itself. It hands validated field specs
//! to [`Orderable::order_by`], which a database-backed collection can turn
//! into an `ORDER BY` and which [`Vec`] implements in memory for any
//! [`SortableRecord`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::keys::SortValue;
use crate::error::SortError;

/// One field of an ordering, `-field` when descending.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldOrder {
    /// Field name as the collection knows it
    pub field: String,
    /// True for a `-` prefix
    pub descending: bool,
}

impl FieldOrder {
    /// Order on `field` in the given direction.
    pub fn new(field: impl Into<String>, descending: bool) -> Self {
        Self {
            field: field.into(),
            descending,
        }
    }

    /// Ascending order on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, false)
    }

    /// Descending order on `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, true)
    }
}

impl fmt::Display for FieldOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "-{}", self.field)
        } else {
            f.write_str(&self.field)
        }
    }
}

impl FromStr for FieldOrder {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, descending) = match s.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        if field.is_empty() || field.starts_with('-') {
            return Err(SortError::InvalidField(s.to_string()));
        }
        Ok(Self::new(field, descending))
    }
}

impl TryFrom<String> for FieldOrder {
    type Error = SortError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldOrder> for String {
    fn from(value: FieldOrder) -> Self {
        value.to_string()
    }
}

/// A collection that can produce a reordered copy of itself.
pub trait Orderable: Sized {
    /// Return the collection ordered by `specs`, highest priority first.
    fn order_by(&self, specs: &[FieldOrder]) -> Self;
}

/// A record that exposes comparable values by field name.
pub trait SortableRecord {
    /// Value for `field`, or [`SortValue::Missing`] for unknown fields.
    fn sort_value(&self, field: &str) -> SortValue;
}

impl<T> Orderable for Vec<T>
where
    T: SortableRecord + Clone,
{
    fn order_by(&self, specs: &[FieldOrder]) -> Self {
        if specs.is_empty() {
            return self.clone();
        }

        // Extract keys once per item
        let mut keyed: Vec<(usize, Vec<SortValue>)> = self
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let keys = specs
                    .iter()
                    .map(|spec| item.sort_value(&spec.field))
                    .collect();
                (i, keys)
            })
            .collect();

        // Stable, so ties keep their incoming order
        keyed.sort_by(|(_, a), (_, b)| {
            specs
                .iter()
                .zip(a.iter().zip(b.iter()))
                .map(|(spec, (ka, kb))| ka.compare_with_order(kb, spec.descending))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        keyed.into_iter().map(|(i, _)| self[i].clone()).collect()
    }
}
