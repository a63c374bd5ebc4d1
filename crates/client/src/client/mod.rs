//! HTTP client for the itemstore API.

pub mod health;
pub mod items;

use serde::{de::DeserializeOwned, Deserialize};

use itemstore_core::responses::ErrorResponse;

use crate::error::{ClientError, Result};

/// HTTP client for the itemstore API.
#[derive(Debug, Clone)]
pub struct ItemstoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl ItemstoreClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment (ITEMSTORE_URL or default).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("ITEMSTORE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Read a response body and decode it, naming `resource` in not-found errors.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<T> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_body(status, &body, resource)
    }
}

/// A success body that may carry an in-band `{"error": ...}` instead of `T`.
#[derive(Deserialize)]
#[serde(untagged)]
enum InBand<T> {
    Error(ErrorResponse),
    Value(T),
}

/// Decode a response body.
///
/// The service reports missing items with a success status and an
/// `{"error": ...}` body; those become [`ClientError::NotFound`].
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str, resource: &str) -> Result<T> {
    match status {
        200..=299 => match serde_json::from_str::<InBand<T>>(body) {
            Ok(InBand::Value(value)) => Ok(value),
            Ok(InBand::Error(_)) => Err(ClientError::NotFound {
                resource: resource.to_string(),
            }),
            // Re-parse as `T` so the error names the actual mismatch.
            Err(_) => serde_json::from_str(body).map_err(ClientError::from),
        },
        404 => Err(ClientError::NotFound {
            resource: resource.to_string(),
        }),
        _ => Err(ClientError::ServerError {
            status,
            message: if body.is_empty() {
                "Unknown error".to_string()
            } else {
                body.to_string()
            },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemstore_core::item::Item;
    use itemstore_core::responses::MessageResponse;

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = ItemstoreClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/api/items"), "http://localhost:8000/api/items");
    }

    #[test]
    fn test_decode_item() {
        let item: Item = decode_body(
            200,
            r#"{"id": 1, "name": "Sample Item 1", "description": null, "price": 29.99}"#,
            "Item 1",
        )
        .unwrap();

        assert_eq!(item, Item::new(1, "Sample Item 1", 29.99));
    }

    #[test]
    fn test_decode_in_band_not_found() {
        let result: Result<Item> = decode_body(200, r#"{"error": "Item not found"}"#, "Item 9999");

        match result {
            Err(ClientError::NotFound { resource }) => assert_eq!(resource, "Item 9999"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_delete_message() {
        let message: MessageResponse =
            decode_body(200, r#"{"message": "Item deleted successfully"}"#, "Item 1").unwrap();
        assert_eq!(message, MessageResponse::item_deleted());
    }

    #[test]
    fn test_decode_http_not_found() {
        let result: Result<Item> = decode_body(404, "", "Item 1");
        assert!(matches!(result, Err(ClientError::NotFound { .. })));
    }

    #[test]
    fn test_decode_server_error_keeps_body() {
        let result: Result<Item> = decode_body(422, "missing field `price`", "Item");

        match result {
            Err(ClientError::ServerError { status, message }) => {
                assert_eq!(status, 422);
                assert_eq!(message, "missing field `price`");
            }
            other => panic!("expected ServerError, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_unexpected_shape() {
        let result: Result<Item> = decode_body(200, r#"{"unexpected": true}"#, "Item");
        assert!(matches!(result, Err(ClientError::Json(_))));
    }
}
