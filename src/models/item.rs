use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stored item row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i64,
    pub title: String,
    /// Owning user's id. Referential only; not enforced by the schema.
    pub user_id: i64,
}

/// Field set accepted when adding or replacing an item. The id is never
/// client-supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemPayload {
    pub title: String,
    pub user_id: i64,
}
