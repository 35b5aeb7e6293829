use serde::{Deserialize, Serialize};

use super::Timestamp;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub user_id: i64,
    pub job_id: i64,
    pub status: String,
    pub notes: Option<String>,
    #[sqlx(try_from = "String")]
    pub created_at: Timestamp,
}
