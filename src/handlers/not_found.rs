//! Terminal fallback handler.

use axum::Json;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use serde_json::json;

/// Ends a resolver chain with `404 Not Found`.
///
/// Sits at the innermost position of the handler chain; every request
/// reaching it was delegated by all resolvers above it.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": {
                "code": "not_found",
                "message": "No mapping for path",
                "details": { "path": uri.path() },
            }
        })),
    )
}
