//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository trait
//! defined in `itemstore_core::storage`. The implementation is selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): process-local `Vec` behind a tokio `RwLock`

#[cfg(not(feature = "inmemory"))]
compile_error!(
    "No storage backend selected. Enable the 'inmemory' feature. \
    Example: cargo build -p itemstore --features inmemory"
);

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;
