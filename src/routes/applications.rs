use axum::extract::{Path, State};
use axum::Json;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::Application;
use crate::schemas::application::{CreateApplication, UpdateApplication};
use crate::state::SharedState;

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Application>>, AppError> {
    let applications = db::applications::list_by_user(&state.pool, auth.user_id).await?;
    Ok(Json(applications))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<CreateApplication>,
) -> Result<Json<Application>, AppError> {
    if !db::jobs::exists(&state.pool, req.job_id).await? {
        return Err(AppError::NotFound("Job not found".to_string()));
    }

    let application = db::applications::create(
        &state.pool,
        auth.user_id,
        req.job_id,
        &req.status,
        req.notes.as_deref(),
    )
    .await?;

    tracing::info!(
        user_id = auth.user_id,
        application_id = application.id,
        job_id = application.job_id,
        "Application created"
    );

    Ok(Json(application))
}

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Application>, AppError> {
    let application = db::applications::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;
    Ok(Json(application))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateApplication>,
) -> Result<Json<Application>, AppError> {
    let application =
        db::applications::update(&state.pool, id, auth.user_id, req.status(), req.notes())
            .await?
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;
    Ok(Json(application))
}
