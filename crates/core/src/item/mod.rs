mod mock_data;
mod operations;
mod requests;
mod types;

pub use mock_data::sample_items;
pub use operations::{find_item_position, next_item_id};
pub use requests::ItemPayload;
pub use types::Item;
