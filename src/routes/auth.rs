use axum::extract::State;
use axum::Json;
use chrono::Duration;

use crate::auth::jwt::{encode_token, Claims};
use crate::auth::password;
use crate::db;
use crate::db::users::NewUser;
use crate::error::AppError;
use crate::schemas::user::{LoginRequest, RegisterRequest, TokenResponse};
use crate::state::SharedState;

fn issue(state: &SharedState, user_id: i64) -> Result<TokenResponse, AppError> {
    let ttl = Duration::minutes(state.config.access_token_ttl_minutes);
    let access_token = encode_token(&Claims::with_ttl(user_id, ttl), &state.config.jwt_secret)
        .map_err(AppError::Internal)?;
    Ok(TokenResponse::bearer(access_token))
}

pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    req.validate()?;

    if db::users::find_by_email(&state.pool, &req.email)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest("Email already registered".to_string()));
    }

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    let user = db::users::create(
        &state.pool,
        &NewUser {
            email: &req.email,
            password_hash: &pw_hash,
            full_name: Some(&req.full_name),
            career_role: req.career_role.as_deref(),
            experience_level: req.experience_level.as_deref(),
            location_preference: req.location_preference.as_deref(),
        },
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::BadRequest("Email already registered".to_string())
        }
        _ => AppError::Database(e),
    })?;

    tracing::info!(user_id = user.id, "User registered");

    Ok(Json(issue(&state, user.id)?))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let user = db::users::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Incorrect email or password".to_string()))?;

    if !password::verify(&req.password, &user.password_hash) {
        return Err(AppError::Unauthorized(
            "Incorrect email or password".to_string(),
        ));
    }

    Ok(Json(issue(&state, user.id)?))
}
