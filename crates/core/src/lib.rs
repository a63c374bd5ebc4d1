//! itemstore_core - Functional core for the itemstore service.
//!
//! Holds the item model, the pure functions that operate on item sequences,
//! the fixed response bodies shared by the service and its client, and the
//! repository trait implemented by storage backends.

pub mod item;
pub mod responses;
pub mod storage;
