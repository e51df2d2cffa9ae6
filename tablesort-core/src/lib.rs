//! # Tablesort Core
//!
//! Presentation helpers for sortable listings in server-rendered pages.
//!
//! ## Overview
//!
//! A page renders its column headers through [`sorting::render_anchor`]. Each
//! anchor reads the request's `sort` and `dir` query parameters, shows the
//! direction icon when its column is the active one, links to the next sort
//! state, and registers its field names in the request's allow-list. The
//! record collection is then passed through [`sorting::apply_sort`], which only
//! orders by fields that an anchor registered earlier in the same render pass.
//!
//! All per-request state lives in a [`sorting::RenderContext`] that the host
//! framework creates fresh for every request and passes by reference through
//! the render pipeline.
//!
//! ## Architecture
//!
//! - [`sorting`]: direction table, query parameters, render context, anchors,
//!   auto-sort and the template tag front-end
//! - [`ordering`]: the orderable collection seam and its in-memory
//!   implementation
//! - [`error`]: error type shared by the tag front-end and field parsing
//!
//! ## Examples
//!
//! ```
//! use tablesort_core::{
//!     SortValue, SortableRecord,
//!     sorting::{RenderContext, SortIcons, apply_sort, render_anchor},
//! };
//!
//! #[derive(Clone)]
//! struct Film {
//!     title: &'static str,
//! }
//!
//! impl SortableRecord for Film {
//!     fn sort_value(&self, field: &str) -> SortValue {
//!         match field {
//!             "title" => SortValue::from(self.title),
//!             _ => SortValue::Missing,
//!         }
//!     }
//! }
//!
//! let icons = SortIcons::default();
//! let mut ctx = RenderContext::from_uri_parts("/media", Some("sort=title&dir=asc&page=2"));
//!
//! let header = render_anchor("title", None, &mut ctx, &icons);
//! assert_eq!(
//!     header,
//!     r#"<a href="/media?sort=title&amp;page=2&amp;dir=desc" title="Title">Title &uarr;</a>"#
//! );
//!
//! let films = vec![Film { title: "Brazil" }, Film { title: "Alien" }];
//! let sorted = apply_sort(films, &ctx);
//! assert_eq!(sorted[0].title, "Alien");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod ordering;
pub mod sorting;

pub use error::{Result, SortError};
pub use ordering::{FieldOrder, Orderable, SortValue, SortableRecord};
pub use sorting::{
    AnchorTag, AutosortTag, QueryParams, RenderContext, SortAnchor, SortDirection, SortIcons,
    SortRequest, apply_sort, render_anchor,
};
