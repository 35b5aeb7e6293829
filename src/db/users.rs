use sqlx::AnyPool;

use crate::models::{Timestamp, User};

pub struct NewUser<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub full_name: Option<&'a str>,
    pub career_role: Option<&'a str>,
    pub experience_level: Option<&'a str>,
    pub location_preference: Option<&'a str>,
}

pub async fn create(pool: &AnyPool, user: &NewUser<'_>) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users
            (email, password_hash, full_name, career_role, experience_level, location_preference, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(user.email)
    .bind(user.password_hash)
    .bind(user.full_name)
    .bind(user.career_role)
    .bind(user.experience_level)
    .bind(user.location_preference)
    .bind(Timestamp::now().to_string())
    .fetch_one(pool)
    .await
}

pub async fn find_by_email(pool: &AnyPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id(pool: &AnyPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Overwrites the profile preferences. `full_name` is kept when `None`.
pub async fn update_profile(
    pool: &AnyPool,
    id: i64,
    full_name: Option<&str>,
    career_role: Option<&str>,
    experience_level: Option<&str>,
    location_preference: Option<&str>,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "UPDATE users
         SET full_name = COALESCE($2, full_name),
             career_role = $3,
             experience_level = $4,
             location_preference = $5
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(full_name)
    .bind(career_role)
    .bind(experience_level)
    .bind(location_preference)
    .fetch_one(pool)
    .await
}
