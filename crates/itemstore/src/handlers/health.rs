//! Health check endpoint.

use axum::Json;
use itemstore_core::responses::HealthResponse;

/// GET /api/health - Fixed liveness payload.
///
/// Returns 200 immediately without touching the store.
#[axum::debug_handler]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
