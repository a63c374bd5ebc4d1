//! Health and welcome operations.

use itemstore_core::responses::{HealthResponse, WelcomeResponse};

use super::ItemstoreClient;
use crate::error::Result;

impl ItemstoreClient {
    /// Fetch the service health payload.
    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self.client.get(self.url("/api/health")).send().await?;
        self.handle_response(response, "Health").await
    }

    /// Fetch the welcome message served at the root path.
    pub async fn welcome(&self) -> Result<WelcomeResponse> {
        let response = self.client.get(self.url("/")).send().await?;
        self.handle_response(response, "Root").await
    }
}
