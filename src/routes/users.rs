//! User routes
//!
//! Same five operations as the item routes, over the `User` table.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::error::{AppError, AppResult};
use crate::models::{Ack, Created, User, UserPayload};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(browse_users))
        .route("/user", post(add_user))
        .route(
            "/user/{id}",
            get(read_user).put(edit_user).delete(destroy_user),
        )
}

/// GET /api/users/all - list every user
async fn browse_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.users().read_all().await?;

    if users.is_empty() {
        return Err(AppError::NotFound("No users found".into()));
    }
    Ok(Json(users))
}

/// GET /api/users/user/{id} - fetch one user
async fn read_user(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<User>> {
    let user = state
        .users()
        .read_one(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(Json(user))
}

/// PUT /api/users/user/{id} - replace a user's fields
async fn edit_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UserPayload>,
) -> AppResult<Json<Ack>> {
    let affected = state.users().update(id, &body).await?;

    if affected == 0 {
        return Err(AppError::NotFound("User not found".into()));
    }
    Ok(Json(Ack::new("User updated successfully")))
}

/// POST /api/users/user - add a new user
async fn add_user(
    State(state): State<AppState>,
    Json(body): Json<UserPayload>,
) -> AppResult<(StatusCode, Json<Created>)> {
    let id = state
        .users()
        .create(&body)
        .await?
        .ok_or_else(|| AppError::Rejected("User not added".into()))?;

    Ok((
        StatusCode::CREATED,
        Json(Created::new("User added successfully", id)),
    ))
}

/// DELETE /api/users/user/{id} - remove a user
async fn destroy_user(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Ack>> {
    let affected = state.users().delete(id).await?;

    if affected == 0 {
        return Err(AppError::NotFound("User not found".into()));
    }
    Ok(Json(Ack::new("User deleted successfully")))
}
