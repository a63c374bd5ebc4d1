//! Pretty output formatting.

use itemstore_core::item::Item;
use itemstore_core::responses::HealthResponse;

/// Format an item for display.
pub fn format_item(item: &Item) -> String {
    let mut output = format!("{} (${:.2})\n  ID: {}", item.name, item.price, item.id);
    if let Some(desc) = &item.description {
        output.push_str(&format!("\n  Description: {}", desc));
    }
    output
}

/// Format items for display.
pub fn format_items(items: &[Item]) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }
    let mut output = format!("ITEMS ({})\n", items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    output
}

/// Format a health payload for display.
pub fn format_health(health: &HealthResponse) -> String {
    format!("Health:\n  Status: {}\n  Service: {}", health.status, health.service)
}
