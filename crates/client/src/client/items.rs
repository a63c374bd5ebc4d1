//! Item API operations.

use itemstore_core::item::{Item, ItemPayload};
use itemstore_core::responses::MessageResponse;

use super::ItemstoreClient;
use crate::error::Result;

fn item_resource(id: i64) -> String {
    format!("Item {id}")
}

impl ItemstoreClient {
    /// List all items.
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        let response = self.client.get(self.url("/api/items")).send().await?;
        self.handle_response(response, "Items").await
    }

    /// Get item by ID.
    pub async fn get_item(&self, id: i64) -> Result<Item> {
        let response = self
            .client
            .get(self.url(&format!("/api/items/{id}")))
            .send()
            .await?;
        self.handle_response(response, &item_resource(id)).await
    }

    /// Create a new item.
    pub async fn create_item(&self, payload: &ItemPayload) -> Result<Item> {
        let response = self
            .client
            .post(self.url("/api/items"))
            .json(payload)
            .send()
            .await?;
        self.handle_response(response, "Item").await
    }

    /// Replace an item.
    pub async fn update_item(&self, id: i64, payload: &ItemPayload) -> Result<Item> {
        let response = self
            .client
            .put(self.url(&format!("/api/items/{id}")))
            .json(payload)
            .send()
            .await?;
        self.handle_response(response, &item_resource(id)).await
    }

    /// Delete item by ID.
    pub async fn delete_item(&self, id: i64) -> Result<MessageResponse> {
        let response = self
            .client
            .delete(self.url(&format!("/api/items/{id}")))
            .send()
            .await?;
        self.handle_response(response, &item_resource(id)).await
    }
}
