use axum::{Router, http::Uri, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{health_handler, media_listing_handler},
    infra::{app_state::AppState, errors::AppError},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(media_listing_handler))
        .route("/media", get(media_listing_handler))
        .route("/health", get(health_handler))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("no route for {}", uri.path()))
}
