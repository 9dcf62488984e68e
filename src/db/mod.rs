//! Database layer - connection pool, bootstrap DDL, and repositories
//!
//! Every repository holds the same pool handle and a bound table name,
//! and issues exactly one parameterized statement per operation. Driver
//! errors propagate untranslated to the caller.

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::{ItemRepo, TableRepo, UserRepo};
