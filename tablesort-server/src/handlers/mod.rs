pub mod health;
pub mod listing;

pub use health::health_handler;
pub use listing::{media_listing_handler, render_media_page};
