use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value};

use crate::analysis::{self, shape};
use crate::auth::extractor::AuthUser;
use crate::db;
use crate::db::resumes::NewResume;
use crate::error::AppError;
use crate::models::Resume;
use crate::schemas::analysis::AnalysisResponse;
use crate::schemas::resume::{ImproveResponse, ResumeResponse, ResumeUpdateQuery, ScoreResponse};
use crate::state::SharedState;
use crate::upload::{parser, storage, UploadedFile};

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<ResumeResponse>>, AppError> {
    let resumes = db::resumes::list_recent(&state.pool, auth.user_id).await?;
    Ok(Json(resumes.into_iter().map(Into::into).collect()))
}

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<ResumeResponse>, AppError> {
    let resume = db::resumes::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;
    Ok(Json(resume.into()))
}

pub async fn upload(
    auth: AuthUser,
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ResumeResponse>, AppError> {
    let mut form = parser::parse_multipart(&headers, body).await?;
    let file = form.take_file("file")?;

    if !file.is_pdf() {
        return Err(AppError::BadRequest(
            "Only PDF files are supported for now.".to_string(),
        ));
    }

    let file_path = storage::save(&state.config.upload_dir, &file.filename, &file.bytes).await?;

    let resume = db::resumes::create(
        &state.pool,
        auth.user_id,
        NewResume {
            file_path: Some(&file_path),
            parsed_data: json!({
                "skills": ["Pending Analysis"],
                "education": "Pending Analysis",
            }),
            candidate_name: None,
            recommended_fields: None,
            score: 0.0,
        },
    )
    .await?;

    tracing::info!(user_id = auth.user_id, resume_id = resume.id, "Resume uploaded");

    Ok(Json(resume.into()))
}

/// Nothing on a resume is editable yet; this only confirms ownership.
pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Query(query): Query<ResumeUpdateQuery>,
) -> Result<Json<ResumeResponse>, AppError> {
    let resume = db::resumes::find_by_id(&state.pool, query.resume_id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;
    Ok(Json(resume.into()))
}

/// Scores an uploaded resume against a job description. Always answers 200:
/// when the model is unavailable the body is the fallback analysis.
pub async fn analyze_match(
    auth: Option<AuthUser>,
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AnalysisResponse>, AppError> {
    let mut form = parser::parse_multipart(&headers, body).await?;
    let file = form.take_file("file")?;
    let job_description = form.take_field("job_description")?;

    let analysis = analysis::analyze(state.model.as_ref(), &file, &job_description).await;

    if let (Some(auth), Some(reply)) = (auth, analysis.reply) {
        match save_analyzed(&state, auth.user_id, &file, reply).await {
            Ok(resume) => {
                tracing::info!(user_id = auth.user_id, resume_id = resume.id, "Saved analyzed resume");
            }
            Err(e) => {
                tracing::error!(user_id = auth.user_id, "Failed to save analyzed resume: {e}");
            }
        }
    }

    Ok(Json(analysis.response))
}

async fn save_analyzed(
    state: &SharedState,
    user_id: i64,
    file: &UploadedFile,
    reply: Value,
) -> Result<Resume, AppError> {
    let columns = shape::stored(&reply);
    let file_path = storage::save(&state.config.upload_dir, &file.filename, &file.bytes).await?;

    let resume = db::resumes::create(
        &state.pool,
        user_id,
        NewResume {
            file_path: Some(&file_path),
            parsed_data: json!({ "analysis": reply }),
            candidate_name: Some(&columns.candidate_name),
            recommended_fields: Some(columns.recommended_fields),
            score: columns.score,
        },
    )
    .await?;

    Ok(resume)
}

pub async fn improve_ai(_auth: AuthUser) -> Json<ImproveResponse> {
    Json(ImproveResponse {
        message: "Resume improved by AI".to_string(),
        improved_text: "Enhanced bullet points...".to_string(),
    })
}

pub async fn score(_auth: AuthUser) -> Json<ScoreResponse> {
    Json(ScoreResponse {
        score: 0,
        feedback: "Upload a resume for a detailed score".to_string(),
    })
}
