use sqlx::AnyPool;

use crate::models::Job;

pub async fn list(pool: &AnyPool, skip: i64, limit: i64) -> Result<Vec<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>("SELECT * FROM jobs ORDER BY id LIMIT $1 OFFSET $2")
        .bind(limit)
        .bind(skip)
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &AnyPool, id: i64) -> Result<Option<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn exists(pool: &AnyPool, id: i64) -> Result<bool, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(row.0 > 0)
}
