use axum::response::Json;
use serde_json::{Value, json};

pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "tablesort-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
