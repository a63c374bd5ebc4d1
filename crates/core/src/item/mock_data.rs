//! Seed data for a freshly started store.

use super::types::Item;

/// Returns the two records every store starts with.
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new(1, "Sample Item 1", 29.99).with_description("This is a sample item"),
        Item::new(2, "Sample Item 2", 49.99).with_description("Another sample item"),
    ]
}
