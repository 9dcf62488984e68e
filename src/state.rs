//! Application state shared across handlers

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::db::{ItemRepo, UserRepo};

/// Shared application state: one repository per table, all on the same pool.
///
/// Cloning is cheap; handlers receive a clone per request.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    items: ItemRepo,
    users: UserRepo,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                items: ItemRepo::new(pool.clone()),
                users: UserRepo::new(pool),
            }),
        }
    }

    pub fn items(&self) -> &ItemRepo {
        &self.inner.items
    }

    pub fn users(&self) -> &UserRepo {
        &self.inner.users
    }
}
