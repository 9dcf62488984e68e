//! stockroom: HTTP backend for items and users
//!
//! A thin REST layer over two SQLite tables. Each entity gets five
//! routes (browse, read, edit, add, destroy) backed by a repository
//! that issues exactly one parameterized statement per operation.

pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{AppError, AppResult};
pub use state::AppState;
