pub mod error;
pub mod health;
pub mod items;
pub mod root;

pub use error::AppError;
