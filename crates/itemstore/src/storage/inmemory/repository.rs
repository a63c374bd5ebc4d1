//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use itemstore_core::item::{find_item_position, next_item_id, sample_items, Item, ItemPayload};
use itemstore_core::storage::{ItemRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Items are held in insertion order in a `Vec` wrapped in `Arc<RwLock<_>>`.
/// Lookups are linear scans. Data is lost when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    items: Arc<RwLock<Vec<Item>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Creates a repository holding `items` in the given order.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Creates a repository seeded with the two sample items.
    pub fn with_sample_items() -> Self {
        Self::with_items(sample_items())
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn list_items(&self) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items.clone())
    }

    async fn get_item(&self, id: i64) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn create_item(&self, payload: ItemPayload) -> Result<Item> {
        let mut items = self.items.write().await;
        let item = payload.into_item(next_item_id(&items));
        items.push(item.clone());
        Ok(item)
    }

    async fn update_item(&self, id: i64, payload: ItemPayload) -> Result<Item> {
        let mut items = self.items.write().await;
        let position =
            find_item_position(&items, id).ok_or_else(|| RepositoryError::item_not_found(id))?;
        let item = payload.into_item(id);
        items[position] = item.clone();
        Ok(item)
    }

    async fn delete_item(&self, id: i64) -> Result<()> {
        let mut items = self.items.write().await;
        let position =
            find_item_position(&items, id).ok_or_else(|| RepositoryError::item_not_found(id))?;
        items.remove(position);
        Ok(())
    }
}
