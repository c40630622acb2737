//! Handler for the health check endpoint.

use axum::Json;
use serde::Serialize;

/// Health check payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Returns service health.
///
/// # Endpoint
///
/// `GET /health`
///
/// The service holds no external connections and its redirect tables
/// are immutable after startup, so a process that answers is healthy.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
