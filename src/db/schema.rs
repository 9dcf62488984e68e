//! Bootstrap DDL for the Item and User tables
//!
//! Idempotent CREATE TABLE IF NOT EXISTS statements, run once at startup.
//! `Item.user_id` refers to `User.id` by convention only; no constraint
//! is declared at this layer.

use sqlx::SqlitePool;

/// Ensure both tables exist.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("ensuring database schema");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS User (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL,
            password TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS Item (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            user_id INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
