//! Route handlers, one module per resource
//!
//! Each handler adapts one request into one repository call and maps
//! the outcome to a status and JSON body. Driver errors cross into the
//! shared [`crate::AppError`] boundary via `?`.

pub mod health;
pub mod items;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Assemble the `/api` subtree.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/items", items::router())
        .nest("/users", users::router())
}
