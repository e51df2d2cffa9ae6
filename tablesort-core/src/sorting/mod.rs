//! Sortable column anchors and allow-listed auto-sorting
//!
//! This module provides:
//! - The direction state table and configurable icons
//! - Ordered query parameters and the per-request sort state
//! - The render context carrying the request-scoped allow-list
//! - Anchor rendering, auto-sort, and the template tag front-end

pub mod anchor;
pub mod autosort;
pub mod context;
pub mod direction;
pub mod params;
pub mod request;
pub mod tags;

pub use anchor::{SortAnchor, build_anchor, default_label, escape_html, render_anchor};
pub use autosort::{apply_sort, resolve_order};
pub use context::RenderContext;
pub use direction::{DEFAULT_SORT_DOWN, DEFAULT_SORT_UP, SortDirection, SortIcons};
pub use params::QueryParams;
pub use request::{DIR_PARAM, SORT_PARAM, SortRequest};
pub use tags::{AnchorTag, AutosortTag, split_tag_contents};
