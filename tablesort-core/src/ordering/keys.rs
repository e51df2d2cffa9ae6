//! Sort values extracted from records
//!
//! A [`SortValue`] wraps whatever a record exposes for a field and handles
//! missing data: missing values sort after present ones in both directions.
//! Integers and floats compare by exact numeric value, so equality and
//! ordering agree across the two variants.

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// Comparable value of one record field.
///
/// Across variants, numbers sort before dates, dates before text, and
/// [`SortValue::Missing`] after everything.
#[derive(Clone, Debug)]
pub enum SortValue {
    /// Compared lexicographically
    Text(String),
    /// Compared numerically with [`SortValue::Float`]
    Integer(i64),
    /// Total order, NaN highest
    Float(OrderedFloat<f64>),
    /// Compared chronologically
    Date(DateTime<Utc>),
    /// Absent value, always last
    Missing,
}

impl SortValue {
    /// Wrap a float in its total order.
    pub fn float(value: f64) -> Self {
        SortValue::Float(OrderedFloat(value))
    }

    /// True for [`SortValue::Missing`].
    pub fn is_missing(&self) -> bool {
        matches!(self, SortValue::Missing)
    }

    fn rank(&self) -> u8 {
        match self {
            SortValue::Integer(_) | SortValue::Float(_) => 0,
            SortValue::Date(_) => 1,
            SortValue::Text(_) => 2,
            SortValue::Missing => 3,
        }
    }

    /// Compare two values in the requested direction while keeping missing
    /// values last.
    pub fn compare_with_order(&self, other: &Self, descending: bool) -> Ordering {
        match (self.is_missing(), other.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                if descending {
                    other.cmp(self)
                } else {
                    self.cmp(other)
                }
            }
        }
    }
}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Integer(a), SortValue::Integer(b)) => a.cmp(b),
            (SortValue::Float(a), SortValue::Float(b)) => a.cmp(b),
            (SortValue::Integer(a), SortValue::Float(b)) => cmp_int_float(*a, *b),
            (SortValue::Float(a), SortValue::Integer(b)) => cmp_int_float(*b, *a).reverse(),
            (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialEq for SortValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortValue {}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Exact comparison of an integer against a float. NaN sorts above every
/// number, as it does for [`OrderedFloat`].
fn cmp_int_float(int: i64, float: OrderedFloat<f64>) -> Ordering {
    // 2^63, the first float past i64::MAX
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

    let float = float.into_inner();
    if float.is_nan() || float >= I64_BOUND {
        return Ordering::Less;
    }
    if float < -I64_BOUND {
        return Ordering::Greater;
    }

    let whole = float.trunc();
    // In range and integral, so the cast is exact
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.total_cmp(&(float - whole)),
        ordering => ordering,
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        SortValue::Text(value.to_string())
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        SortValue::Text(value)
    }
}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        SortValue::Integer(value)
    }
}

impl From<u32> for SortValue {
    fn from(value: u32) -> Self {
        SortValue::Integer(i64::from(value))
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::float(value)
    }
}

impl From<f32> for SortValue {
    fn from(value: f32) -> Self {
        SortValue::float(f64::from(value))
    }
}

impl From<DateTime<Utc>> for SortValue {
    fn from(value: DateTime<Utc>) -> Self {
        SortValue::Date(value)
    }
}

impl<T: Into<SortValue>> From<Option<T>> for SortValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SortValue::Missing)
    }
}
