//! In-memory storage backend.
//!
//! Keeps every item in a `Vec` wrapped in `Arc<RwLock<_>>`. Nothing is
//! persisted; the data lives as long as the process.
//!
//! # Example
//!
//! ```rust,ignore
//! use itemstore::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::with_sample_items();
//! ```

mod repository;

pub use repository::InMemoryRepository;
