//! Item CRUD handlers.
//!
//! Handlers go through the repository trait object held in [`AppState`].
//! Missing ids surface as `RepositoryError::NotFound`, which [`AppError`]
//! renders as an in-band `{"error": ...}` body with a 200 status.

use axum::{
    extract::{Path, State},
    Json,
};

use itemstore_core::item::{Item, ItemPayload};
use itemstore_core::responses::MessageResponse;
use itemstore_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// List all items (GET /api/items).
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, AppError> {
    let items = state.items.list_items().await?;
    Ok(Json(items))
}

/// Get a single item by ID (GET /api/items/{item_id}).
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<Json<Item>, AppError> {
    let item = state
        .items
        .get_item(item_id)
        .await?
        .ok_or_else(|| RepositoryError::item_not_found(item_id))?;

    Ok(Json(item))
}

/// Create a new item (POST /api/items).
///
/// Any `id` in the body is ignored; the store assigns the next one.
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<ItemPayload>,
) -> Result<Json<Item>, AppError> {
    let item = state.items.create_item(payload).await?;

    tracing::info!(item_id = item.id, name = %item.name, "Created new item");

    Ok(Json(item))
}

/// Replace an item by ID (PUT /api/items/{item_id}).
///
/// The stored item always keeps the path id.
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
    Json(payload): Json<ItemPayload>,
) -> Result<Json<Item>, AppError> {
    let item = state.items.update_item(item_id, payload).await?;

    tracing::info!(item_id, name = %item.name, "Updated item");

    Ok(Json(item))
}

/// Delete an item by ID (DELETE /api/items/{item_id}).
pub async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.items.delete_item(item_id).await?;

    tracing::info!(item_id, "Deleted item");

    Ok(Json(MessageResponse::item_deleted()))
}
