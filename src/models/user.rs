use serde::{Deserialize, Serialize};

use super::Timestamp;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: Option<String>,
    pub career_role: Option<String>,
    pub experience_level: Option<String>,
    pub location_preference: Option<String>,
    #[sqlx(try_from = "String")]
    pub created_at: Timestamp,
}
