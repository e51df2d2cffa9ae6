//! Sort state read from the `sort` and `dir` query parameters

use super::{SortDirection, params::QueryParams};

/// Query parameter naming the sort key
pub const SORT_PARAM: &str = "sort";
/// Query parameter carrying the direction state
pub const DIR_PARAM: &str = "dir";

/// Sort state requested by the current URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortRequest {
    /// Raw `sort` value, possibly a comma-separated compound key
    pub sort: Option<String>,
    /// Normalized `dir` value
    pub direction: SortDirection,
}

impl SortRequest {
    /// Read `sort` and `dir`, last value winning on repeats.
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            sort: params.get(SORT_PARAM).map(str::to_string),
            direction: SortDirection::from_param(params.get(DIR_PARAM)),
        }
    }

    /// The active sort key, empty when no `sort` parameter was sent.
    pub fn current_key(&self) -> &str {
        self.sort.as_deref().unwrap_or("")
    }

    /// Exact, case-sensitive match against the current key.
    pub fn is_active(&self, field: &str) -> bool {
        self.current_key() == field
    }

    /// Order field handed to auto-sort: the sort key with a leading `-`
    /// unless the direction is ascending. Empty when nothing is sorted.
    pub fn resolved_field(&self) -> String {
        match self.sort.as_deref() {
            Some(sort) if !sort.is_empty() => {
                format!("{}{}", self.direction.order_prefix(), sort)
            }
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(query: &str) -> SortRequest {
        SortRequest::from_params(&QueryParams::parse(query))
    }

    #[test]
    fn test_missing_params() {
        let req = request("page=3");

        assert_eq!(req.current_key(), "");
        assert_eq!(req.direction, SortDirection::Unspecified);
        assert_eq!(req.resolved_field(), "");
    }

    #[test]
    fn test_resolved_field_follows_direction() {
        assert_eq!(request("sort=name&dir=asc").resolved_field(), "name");
        assert_eq!(request("sort=name&dir=desc").resolved_field(), "-name");
        assert_eq!(request("sort=name").resolved_field(), "-name");
        assert_eq!(request("sort=name&dir=bogus").resolved_field(), "-name");
        assert_eq!(request("sort=a,b&dir=asc").resolved_field(), "a,b");
    }

    #[test]
    fn test_active_match_is_exact() {
        let req = request("sort=Name");

        assert!(req.is_active("Name"));
        assert!(!req.is_active("name"));
        assert!(!req.is_active("Name,date"));
    }
}
