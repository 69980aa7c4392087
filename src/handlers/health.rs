use axum::Json;
use serde_json::{json, Value};

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Local::now().naive_local(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
