//! Direction states and the icons shown for them
//!
//! The table is lopsided: an unspecified direction renders the
//! same down arrow as a descending one, and both flip to ascending on the
//! next click. Clicking twice from a fresh page therefore lands on
//! ascending again, never back on unspecified.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon for ascending columns unless configured otherwise
pub const DEFAULT_SORT_UP: &str = "&uarr;";
/// Icon for descending and unspecified columns unless configured otherwise
pub const DEFAULT_SORT_DOWN: &str = "&darr;";

/// Direction state carried by the `dir` query parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// `dir=asc`
    Ascending,
    /// `dir=desc`
    Descending,
    /// No `dir`, or one that is not recognized
    #[default]
    Unspecified,
}

impl SortDirection {
    /// Normalize a raw `dir` value. Anything other than `asc` or `desc`,
    /// including a missing parameter, is unspecified.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("asc") => SortDirection::Ascending,
            Some("desc") => SortDirection::Descending,
            _ => SortDirection::Unspecified,
        }
    }

    /// Wire token written back into generated links
    pub fn as_param(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
            SortDirection::Unspecified => "",
        }
    }

    /// The direction the next click on an active column produces
    pub fn inverse(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending | SortDirection::Unspecified => SortDirection::Ascending,
        }
    }

    /// Icon shown next to the label while this direction is active
    pub fn icon(self, icons: &SortIcons) -> &str {
        match self {
            SortDirection::Ascending => &icons.up,
            SortDirection::Descending | SortDirection::Unspecified => &icons.down,
        }
    }

    /// Prefix applied to the resolved order field. Unspecified orders the
    /// same way its down arrow suggests.
    pub fn order_prefix(self) -> &'static str {
        match self {
            SortDirection::Ascending => "",
            SortDirection::Descending | SortDirection::Unspecified => "-",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Glyphs rendered next to the label of the active column.
///
/// Values are inserted into markup verbatim, so HTML entities such as
/// `&uarr;` are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortIcons {
    /// Shown for ascending
    #[serde(rename = "sort-up-icon", default = "default_up")]
    pub up: String,
    /// Shown for descending and unspecified
    #[serde(rename = "sort-down-icon", default = "default_down")]
    pub down: String,
}

fn default_up() -> String {
    DEFAULT_SORT_UP.to_string()
}

fn default_down() -> String {
    DEFAULT_SORT_DOWN.to_string()
}

impl Default for SortIcons {
    fn default() -> Self {
        Self {
            up: default_up(),
            down: default_down(),
        }
    }
}

impl SortIcons {
    /// Icons from explicit glyphs.
    pub fn new(up: impl Into<String>, down: impl Into<String>) -> Self {
        Self {
            up: up.into(),
            down: down.into(),
        }
    }
}
