use axum::extract::{Path, Query, State};
use axum::Json;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::Job;
use crate::schemas::job::{JobListQuery, JobMatch};
use crate::state::SharedState;

/// Jobs offered by the match listing. Matching is not implemented yet; every
/// entry carries the same canned percentage and skill gap.
const MATCH_LIMIT: i64 = 5;
const MATCH_PERCENTAGE: u8 = 95;
const MATCH_MISSING_SKILLS: &[&str] = &["Kubernetes"];

pub async fn list(
    State(state): State<SharedState>,
    Query(query): Query<JobListQuery>,
) -> Result<Json<Vec<Job>>, AppError> {
    let jobs = db::jobs::list(&state.pool, query.skip.max(0), query.limit).await?;
    Ok(Json(jobs))
}

pub async fn matched(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<JobMatch>>, AppError> {
    tracing::debug!(user_id = auth.user_id, "Listing job matches");

    let jobs = db::jobs::list(&state.pool, 0, MATCH_LIMIT).await?;
    let matches = jobs
        .into_iter()
        .map(|job| JobMatch {
            job,
            match_percentage: MATCH_PERCENTAGE,
            missing_skills: MATCH_MISSING_SKILLS.iter().map(|s| s.to_string()).collect(),
        })
        .collect();

    Ok(Json(matches))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Job>, AppError> {
    let job = db::jobs::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;
    Ok(Json(job))
}
