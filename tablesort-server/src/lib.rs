//! # Tablesort Server
//!
//! Axum application serving a sortable media listing. Column headers are
//! tablesort anchors and the rows pass through auto-sort, so only columns
//! rendered on the page can be used to order it.

pub mod catalog;
pub mod handlers;
pub mod infra;
pub mod routes;
pub mod templates;

pub use infra::app_state::AppState;
pub use routes::create_router;
