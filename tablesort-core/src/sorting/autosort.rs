//! Allow-listed auto-sort

use tracing::debug;

use super::RenderContext;
use crate::ordering::{FieldOrder, Orderable};

/// Translate a resolved order field into field specs, or `None` when any
/// component was not registered by an anchor.
///
/// Leading `-` characters mark the whole key as descending; every component
/// of a compound key shares that one direction.
pub fn resolve_order<S: AsRef<str>>(order_field: &str, allow_list: &[S]) -> Option<Vec<FieldOrder>> {
    let descending = order_field.starts_with('-');
    let fields = order_field.trim_start_matches('-');

    let mut specs = Vec::new();
    for field in fields.split(',') {
        if !allow_list.iter().any(|valid| valid.as_ref() == field) {
            debug!(
                field,
                order_field, "sort field not registered by an anchor; leaving collection unordered"
            );
            return None;
        }
        specs.push(FieldOrder::new(field, descending));
    }
    Some(specs)
}

/// Order `collection` by the request's resolved field if every component
/// of it is in the allow-list; otherwise hand the collection back as-is.
pub fn apply_sort<C: Orderable>(collection: C, ctx: &RenderContext) -> C {
    match resolve_order(ctx.field(), ctx.allow_list()) {
        Some(specs) => collection.order_by(&specs),
        None => collection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain_and_descending() {
        let allow = ["name", "date"];

        assert_eq!(
            resolve_order("name", &allow),
            Some(vec![FieldOrder::new("name", false)])
        );
        assert_eq!(
            resolve_order("-name", &allow),
            Some(vec![FieldOrder::new("name", true)])
        );
        assert_eq!(resolve_order("other", &allow), None);
    }

    #[test]
    fn test_compound_shares_direction() {
        let allow = ["field1", "field2"];

        assert_eq!(
            resolve_order("-field1,field2", &allow),
            Some(vec![
                FieldOrder::new("field1", true),
                FieldOrder::new("field2", true),
            ])
        );
    }

    #[test]
    fn test_any_unknown_component_fails_closed() {
        let allow = ["a", "b"];

        assert!(resolve_order("a,b", &allow).is_some());
        assert_eq!(resolve_order("a,c", &allow), None);
        assert_eq!(resolve_order("c,a", &allow), None);
    }

    #[test]
    fn test_empty_field_never_validates() {
        let allow = ["name"];
        let empty: [&str; 0] = [];

        assert_eq!(resolve_order("", &allow), None);
        assert_eq!(resolve_order("name", &empty), None);
    }

    #[test]
    fn test_repeated_dashes_collapse() {
        let allow = ["name"];

        assert_eq!(
            resolve_order("--name", &allow),
            Some(vec![FieldOrder::new("name", true)])
        );
    }
}
