use axum::extract::State;
use axum::Json;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::schemas::user::{ProfileUpdate, UserResponse};
use crate::state::SharedState;

pub async fn get_profile(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = db::users::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;
    Ok(Json(user.into()))
}

pub async fn update_profile(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<ProfileUpdate>,
) -> Result<Json<UserResponse>, AppError> {
    let user = db::users::update_profile(
        &state.pool,
        auth.user_id,
        req.full_name.as_deref(),
        req.career_role.as_deref(),
        req.experience_level.as_deref(),
        req.location_preference.as_deref(),
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::RowNotFound => AppError::Unauthorized("User not found".to_string()),
        _ => AppError::Database(e),
    })?;

    Ok(Json(user.into()))
}
