//! Item repository
//!
//! Five operations against the `Item` table, one statement each.
//! Updates are full replacements, not merges.

use sqlx::SqlitePool;

use super::TableRepo;
use crate::models::{Item, ItemPayload};

#[derive(Clone)]
pub struct ItemRepo {
    repo: TableRepo,
}

impl ItemRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: TableRepo::new("Item", pool),
        }
    }

    /// Insert an item and return the generated id, or `None` if the
    /// engine reports no insert.
    pub async fn create(&self, item: &ItemPayload) -> Result<Option<i64>, sqlx::Error> {
        let sql = format!(
            "INSERT INTO {} (title, user_id) VALUES (?, ?)",
            self.repo.table()
        );
        let result = sqlx::query(&sql)
            .bind(&item.title)
            .bind(item.user_id)
            .execute(self.repo.pool())
            .await?;

        Ok((result.rows_affected() > 0).then(|| result.last_insert_rowid()))
    }

    /// Fetch a single item by id.
    pub async fn read_one(&self, id: i64) -> Result<Option<Item>, sqlx::Error> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", self.repo.table());
        sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.repo.pool())
            .await
    }

    /// Fetch every item, in storage order.
    pub async fn read_all(&self) -> Result<Vec<Item>, sqlx::Error> {
        let sql = format!("SELECT * FROM {}", self.repo.table());
        sqlx::query_as(&sql).fetch_all(self.repo.pool()).await
    }

    /// Replace an item's fields, returning the affected-row count.
    pub async fn update(&self, id: i64, item: &ItemPayload) -> Result<u64, sqlx::Error> {
        let sql = format!(
            "UPDATE {} SET title = ?, user_id = ? WHERE id = ?",
            self.repo.table()
        );
        let result = sqlx::query(&sql)
            .bind(&item.title)
            .bind(item.user_id)
            .bind(id)
            .execute(self.repo.pool())
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete an item by id, returning the affected-row count.
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let sql = format!("DELETE FROM {} WHERE id = ?", self.repo.table());
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(self.repo.pool())
            .await?;

        Ok(result.rows_affected())
    }
}
