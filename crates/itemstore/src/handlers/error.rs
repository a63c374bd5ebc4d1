use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use itemstore_core::{responses::ErrorResponse, storage::RepositoryError};

/// Handler error that wraps `anyhow::Error`.
///
/// A missing item is not an HTTP error for this service: it renders as
/// `200 {"error": "Item not found"}`. Anything else is a 500.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.0.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::NotFound { entity_type, id }) => {
                tracing::warn!(entity_type = %entity_type, id = %id, "Requested entity not found");
                (StatusCode::OK, Json(ErrorResponse::item_not_found())).into_response()
            }
            None => {
                tracing::error!(error = %self.0, "Application error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
            }
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_renders_in_band() {
        let response = AppError::from(RepositoryError::item_not_found(9)).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Item not found"})
        );
    }

    #[tokio::test]
    async fn test_other_errors_render_as_500() {
        let response = AppError::from(anyhow::anyhow!("lock lost")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
