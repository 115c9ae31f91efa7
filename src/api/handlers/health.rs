use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::value_objects::{Algorithm, MediaCategory};

/// GET /health
/// Liveness check with the registered algorithms and the media categories
pub async fn health_handler(
    State(algorithms): State<Arc<Vec<Algorithm>>>,
) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "media_codec",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "algorithms": algorithms.as_slice(),
            "categories": MediaCategory::MEDIA,
        })),
    )
}
