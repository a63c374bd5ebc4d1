//! Root route handler.

use axum::Json;
use itemstore_core::responses::WelcomeResponse;

/// Handler for GET /
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::default())
}
