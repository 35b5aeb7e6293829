use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Resume;

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub id: i64,
    pub user_id: i64,
    pub file_path: Option<String>,
    pub parsed_data: Option<Value>,
    pub candidate_name: Option<String>,
    pub recommended_fields: Vec<String>,
    pub score: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<Resume> for ResumeResponse {
    fn from(resume: Resume) -> Self {
        Self {
            id: resume.id,
            user_id: resume.user_id,
            file_path: resume.file_path,
            parsed_data: resume.parsed_data,
            candidate_name: resume.candidate_name,
            recommended_fields: resume.recommended_fields.unwrap_or_default(),
            score: resume.score,
            created_at: resume.created_at.0,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ResumeUpdateQuery {
    pub resume_id: i64,
}

#[derive(Debug, Serialize)]
pub struct ImproveResponse {
    pub message: String,
    pub improved_text: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: i64,
    pub feedback: String,
}
