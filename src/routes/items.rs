//! Item routes
//!
//! Browse, read, edit, add, destroy over the `Item` table.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::error::{AppError, AppResult};
use crate::models::{Ack, Created, Item, ItemPayload};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(browse_items))
        .route("/item", post(add_item))
        .route(
            "/item/{id}",
            get(read_item).put(edit_item).delete(destroy_item),
        )
}

/// GET /api/items/all - list every item
async fn browse_items(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    let items = state.items().read_all().await?;

    if items.is_empty() {
        return Err(AppError::NotFound("No items found".into()));
    }
    Ok(Json(items))
}

/// GET /api/items/item/{id} - fetch one item
async fn read_item(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Item>> {
    let item = state
        .items()
        .read_one(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Item not found".into()))?;

    Ok(Json(item))
}

/// PUT /api/items/item/{id} - replace an item's fields
async fn edit_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<ItemPayload>,
) -> AppResult<Json<Ack>> {
    let affected = state.items().update(id, &body).await?;

    if affected == 0 {
        return Err(AppError::NotFound("Item not found".into()));
    }
    Ok(Json(Ack::new("Item updated successfully")))
}

/// POST /api/items/item - add a new item
async fn add_item(
    State(state): State<AppState>,
    Json(body): Json<ItemPayload>,
) -> AppResult<(StatusCode, Json<Created>)> {
    let id = state
        .items()
        .create(&body)
        .await?
        .ok_or_else(|| AppError::Rejected("Item not added".into()))?;

    Ok((
        StatusCode::CREATED,
        Json(Created::new("Item added successfully", id)),
    ))
}

/// DELETE /api/items/item/{id} - remove an item
async fn destroy_item(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Ack>> {
    let affected = state.items().delete(id).await?;

    if affected == 0 {
        return Err(AppError::NotFound("Item not found".into()));
    }
    Ok(Json(Ack::new("Item deleted successfully")))
}
