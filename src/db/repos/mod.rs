//! Repository implementations for database access
//!
//! Each entity repository composes [`TableRepo`], which carries the two
//! things every repository needs: the bound table name and the shared
//! pool handle. Values are always bound as parameters; the only text
//! spliced into a statement is the bound table name itself.

pub mod items;
pub mod users;

pub use items::ItemRepo;
pub use users::UserRepo;

use sqlx::SqlitePool;

/// Table binding shared by every repository.
///
/// Holds no other state; connection lifecycle belongs to the pool.
#[derive(Clone)]
pub struct TableRepo {
    table: &'static str,
    pool: SqlitePool,
}

impl TableRepo {
    pub fn new(table: &'static str, pool: SqlitePool) -> Self {
        Self { table, pool }
    }

    /// The bound table name.
    pub fn table(&self) -> &'static str {
        self.table
    }

    /// The shared database handle.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
