use serde::{Deserialize, Serialize};

use super::Timestamp;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: Option<String>,
    #[sqlx(try_from = "String")]
    pub created_at: Timestamp,
}
