use serde_json::Value;
use sqlx::AnyPool;

use crate::models::{Resume, Timestamp};

/// How many resumes the listing returns.
pub const RECENT_LIMIT: i64 = 5;

pub struct NewResume<'a> {
    pub file_path: Option<&'a str>,
    pub parsed_data: Value,
    pub candidate_name: Option<&'a str>,
    pub recommended_fields: Option<Vec<String>>,
    pub score: f64,
}

pub async fn create(
    pool: &AnyPool,
    user_id: i64,
    resume: NewResume<'_>,
) -> Result<Resume, sqlx::Error> {
    let recommended_fields = resume
        .recommended_fields
        .map(|fields| Value::from(fields).to_string());

    sqlx::query_as::<_, Resume>(
        "INSERT INTO resumes
            (user_id, file_path, parsed_data, candidate_name, recommended_fields, score, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(user_id)
    .bind(resume.file_path)
    .bind(resume.parsed_data.to_string())
    .bind(resume.candidate_name)
    .bind(recommended_fields)
    .bind(resume.score)
    .bind(Timestamp::now().to_string())
    .fetch_one(pool)
    .await
}

pub async fn list_recent(pool: &AnyPool, user_id: i64) -> Result<Vec<Resume>, sqlx::Error> {
    sqlx::query_as::<_, Resume>(
        "SELECT * FROM resumes WHERE user_id = $1 ORDER BY created_at DESC, id DESC LIMIT $2",
    )
    .bind(user_id)
    .bind(RECENT_LIMIT)
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(
    pool: &AnyPool,
    id: i64,
    user_id: i64,
) -> Result<Option<Resume>, sqlx::Error> {
    sqlx::query_as::<_, Resume>("SELECT * FROM resumes WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}
