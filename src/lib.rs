pub mod analysis;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod schemas;
pub mod state;
pub mod upload;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::routing::get;
use axum::{Json, Router};
use sqlx::AnyPool;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::analysis::gemini::GeminiClient;
use crate::analysis::GenerativeModel;
use crate::config::Config;
use crate::schemas::MessageResponse;
use crate::state::{AppState, SharedState};

/// Builds the application wired to the Gemini client described by `config`.
pub fn build_app(pool: AnyPool, config: Config) -> Router {
    let model = Arc::new(GeminiClient::new(&config.gemini));
    build_app_with_model(pool, config, model)
}

pub fn build_app_with_model(
    pool: AnyPool,
    config: Config,
    model: Arc<dyn GenerativeModel>,
) -> Router {
    if config.gemini.api_key.is_none() {
        tracing::warn!("No GEMINI_API_KEY configured; resume analysis will return fallback results");
    }

    let max_upload_size = config.max_upload_size;

    let state: SharedState = Arc::new(AppState {
        pool,
        config,
        model,
    });

    Router::new()
        .merge(routes::api_routes())
        .route("/", get(root))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(max_upload_size))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                )),
        )
        .with_state(state)
}

async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to Stitch API".to_string(),
    })
}

async fn health() -> &'static str {
    "ok"
}
