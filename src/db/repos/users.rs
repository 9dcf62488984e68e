//! User repository
//!
//! Same five operations as the item repository, bound to the `User`
//! table. Passwords are stored as given; hashing is out of scope here.

use sqlx::SqlitePool;

use super::TableRepo;
use crate::models::{User, UserPayload};

#[derive(Clone)]
pub struct UserRepo {
    repo: TableRepo,
}

impl UserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: TableRepo::new("User", pool),
        }
    }

    pub async fn create(&self, user: &UserPayload) -> Result<Option<i64>, sqlx::Error> {
        let sql = format!(
            "INSERT INTO {} (email, password) VALUES (?, ?)",
            self.repo.table()
        );
        let result = sqlx::query(&sql)
            .bind(&user.email)
            .bind(&user.password)
            .execute(self.repo.pool())
            .await?;

        Ok((result.rows_affected() > 0).then(|| result.last_insert_rowid()))
    }

    pub async fn read_one(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", self.repo.table());
        sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.repo.pool())
            .await
    }

    pub async fn read_all(&self) -> Result<Vec<User>, sqlx::Error> {
        let sql = format!("SELECT * FROM {}", self.repo.table());
        sqlx::query_as(&sql).fetch_all(self.repo.pool()).await
    }

    pub async fn update(&self, id: i64, user: &UserPayload) -> Result<u64, sqlx::Error> {
        let sql = format!(
            "UPDATE {} SET email = ?, password = ? WHERE id = ?",
            self.repo.table()
        );
        let result = sqlx::query(&sql)
            .bind(&user.email)
            .bind(&user.password)
            .bind(id)
            .execute(self.repo.pool())
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let sql = format!("DELETE FROM {} WHERE id = ?", self.repo.table());
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(self.repo.pool())
            .await?;

        Ok(result.rows_affected())
    }
}
