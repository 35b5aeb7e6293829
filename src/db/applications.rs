use sqlx::AnyPool;

use crate::models::{Application, Timestamp};

pub async fn list_by_user(
    pool: &AnyPool,
    user_id: i64,
) -> Result<Vec<Application>, sqlx::Error> {
    sqlx::query_as::<_, Application>(
        "SELECT * FROM applications WHERE user_id = $1 ORDER BY created_at DESC, id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn create(
    pool: &AnyPool,
    user_id: i64,
    job_id: i64,
    status: &str,
    notes: Option<&str>,
) -> Result<Application, sqlx::Error> {
    sqlx::query_as::<_, Application>(
        "INSERT INTO applications (user_id, job_id, status, notes, created_at)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(user_id)
    .bind(job_id)
    .bind(status)
    .bind(notes)
    .bind(Timestamp::now().to_string())
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(
    pool: &AnyPool,
    id: i64,
    user_id: i64,
) -> Result<Option<Application>, sqlx::Error> {
    sqlx::query_as::<_, Application>("SELECT * FROM applications WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Applies whichever of `status` / `notes` is given. Returns `None` when the
/// application does not exist or belongs to someone else.
pub async fn update(
    pool: &AnyPool,
    id: i64,
    user_id: i64,
    status: Option<&str>,
    notes: Option<&str>,
) -> Result<Option<Application>, sqlx::Error> {
    sqlx::query_as::<_, Application>(
        "UPDATE applications
         SET status = COALESCE($3, status),
             notes = COALESCE($4, notes)
         WHERE id = $1 AND user_id = $2 RETURNING *",
    )
    .bind(id)
    .bind(user_id)
    .bind(status)
    .bind(notes)
    .fetch_optional(pool)
    .await
}
