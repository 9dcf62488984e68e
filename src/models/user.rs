use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stored user row. Serialized as-is, password included; there is no
/// auth layer in front of this API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
}

/// Field set accepted when adding or replacing a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    pub email: String,
    pub password: String,
}
