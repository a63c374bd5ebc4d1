use super::types::Item;

/// Returns the id the next created item receives.
///
/// One greater than the current maximum id, or `1` when there are no items.
/// Ids freed by deleting the maximum are handed out again.
pub fn next_item_id(items: &[Item]) -> i64 {
    items.iter().map(|item| item.id).max().unwrap_or(0) + 1
}

/// Returns the position of the first item whose id matches.
pub fn find_item_position(items: &[Item], id: i64) -> Option<usize> {
    items.iter().position(|item| item.id == id)
}
