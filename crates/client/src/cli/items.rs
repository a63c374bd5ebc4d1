//! Item CLI commands.

use clap::{Parser, Subcommand};

/// Item management commands.
#[derive(Debug, Parser)]
pub struct ItemsCommand {
    #[command(subcommand)]
    pub action: ItemsAction,
}

/// Available item actions.
#[derive(Debug, Subcommand)]
pub enum ItemsAction {
    /// List all items.
    List,
    /// Get item by ID.
    Get {
        /// Item ID.
        id: i64,
    },
    /// Create a new item.
    Create {
        /// Item name.
        #[arg(long)]
        name: String,
        /// Item price.
        #[arg(long)]
        price: f64,
        /// Item description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Replace an item. Fields not given are cleared.
    Update {
        /// Item ID.
        id: i64,
        /// New name.
        #[arg(long)]
        name: String,
        /// New price.
        #[arg(long)]
        price: f64,
        /// New description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete item by ID.
    Delete {
        /// Item ID.
        id: i64,
    },
}
