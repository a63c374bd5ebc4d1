//! Shared application state.
//!
//! Every handler receives a clone of [`AppState`]. The item store sits
//! behind the repository trait so the backend is chosen at startup.

use std::sync::Arc;

use itemstore_core::storage::ItemRepository;

use crate::{config::Config, storage::InMemoryRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Item repository.
    pub items: Arc<dyn ItemRepository>,
    /// Configuration the service was started with.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState with the given repository and configuration.
    pub fn new(items: Arc<dyn ItemRepository>, config: Config) -> Self {
        Self {
            items,
            config: Arc::new(config),
        }
    }

    /// Creates an AppState backed by an in-memory store holding the sample items.
    pub fn with_sample_items(config: Config) -> Self {
        Self::new(Arc::new(InMemoryRepository::with_sample_items()), config)
    }
}
