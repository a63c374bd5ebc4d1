//! itemstore_client - CLI client for the itemstore API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::ItemstoreClient;
pub use error::{ClientError, Result};
