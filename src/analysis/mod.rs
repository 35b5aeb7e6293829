//! Resume-versus-job-description analysis backed by a generative model.
//!
//! The pipeline never fails outward: text extraction degrades to a placeholder
//! and any model failure becomes the fallback payload, so the caller always
//! gets a renderable [`AnalysisResponse`].

pub mod extract;
pub mod gemini;
pub mod prompt;
pub mod shape;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::schemas::analysis::AnalysisResponse;
use crate::upload::UploadedFile;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("GEMINI_API_KEY not found or still placeholder in environment.")]
    MissingKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model returned empty content")]
    EmptyContent,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Model reply is not a JSON object")]
    NotAnObject,
}

/// A model that answers a prompt with a JSON object.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate_json(&self, prompt: &str) -> Result<Value, AiError>;
}

pub struct Analysis {
    pub response: AnalysisResponse,
    /// The model's raw reply; `None` when the fallback payload was used.
    pub reply: Option<Value>,
}

pub async fn analyze(
    model: &dyn GenerativeModel,
    file: &UploadedFile,
    job_description: &str,
) -> Analysis {
    let filename = file.filename.clone();
    let bytes = file.bytes.clone();
    let resume_text = tokio::task::spawn_blocking(move || extract::resume_text(&filename, &bytes))
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Resume text extraction aborted: {e}");
            extract::unreadable(&file.filename)
        });

    let prompt = prompt::build(job_description, &resume_text);

    match model.generate_json(&prompt).await {
        Ok(reply) => Analysis {
            response: shape::shape(&reply),
            reply: Some(reply),
        },
        Err(e) => {
            tracing::warn!("AI analysis error: {e}");
            Analysis {
                response: shape::fallback(&e.to_string()),
                reply: None,
            }
        }
    }
}
