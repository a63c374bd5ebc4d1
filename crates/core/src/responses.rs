//! Fixed response bodies shared by the service and its client.

use serde::{Deserialize, Serialize};

/// Service name reported by the health and root endpoints.
pub const SERVICE_NAME: &str = "FastAPI Backend";

/// Status reported by a live service.
pub const HEALTHY_STATUS: &str = "healthy";

/// Message returned when a requested item does not exist.
pub const ITEM_NOT_FOUND: &str = "Item not found";

/// Message returned after a successful delete.
pub const ITEM_DELETED: &str = "Item deleted successfully";

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            message: format!("Welcome to {SERVICE_NAME}!"),
        }
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: HEALTHY_STATUS.to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}

/// Plain `{message}` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn item_deleted() -> Self {
        Self {
            message: ITEM_DELETED.to_string(),
        }
    }
}

/// Plain `{error}` body.
///
/// Missing items are reported in-band with this body and a success status,
/// not through an HTTP error status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn item_not_found() -> Self {
        Self {
            error: ITEM_NOT_FOUND.to_string(),
        }
    }
}
