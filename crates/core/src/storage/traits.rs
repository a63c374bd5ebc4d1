use async_trait::async_trait;

use crate::item::{Item, ItemPayload};

use super::Result;

/// Repository for item operations.
///
/// Items are kept in insertion order; lookups return the first matching id.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Lists every item in insertion order.
    async fn list_items(&self) -> Result<Vec<Item>>;

    /// Gets an item by its ID.
    async fn get_item(&self, id: i64) -> Result<Option<Item>>;

    /// Appends a new item, assigning it the next id.
    async fn create_item(&self, payload: ItemPayload) -> Result<Item>;

    /// Replaces the item with `id` in place. The stored item keeps `id`.
    async fn update_item(&self, id: i64, payload: ItemPayload) -> Result<Item>;

    /// Removes the item with `id`.
    async fn delete_item(&self, id: i64) -> Result<()>;
}
