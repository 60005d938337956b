//! Health check endpoint.

use axum::Json;
use serde_json::{Value, json};

/// Liveness probe.
///
/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
