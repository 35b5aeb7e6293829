pub mod applications;
pub mod auth;
pub mod jobs;
pub mod resume;
pub mod settings;
pub mod user;

use axum::routing::{get, post, put};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        // User
        .route(
            "/user/profile",
            get(user::get_profile).post(user::update_profile),
        )
        // Jobs
        .route("/jobs", get(jobs::list))
        .route("/jobs/", get(jobs::list))
        .route("/jobs/match", get(jobs::matched))
        .route("/jobs/{id}", get(jobs::get))
        // Applications
        .route(
            "/applications",
            get(applications::list).post(applications::create),
        )
        .route(
            "/applications/",
            get(applications::list).post(applications::create),
        )
        .route(
            "/applications/{id}",
            get(applications::get).put(applications::update),
        )
        // Resume
        .route("/resume", get(resume::list))
        .route("/resume/", get(resume::list))
        .route("/resume/upload", post(resume::upload))
        .route("/resume/update", put(resume::update))
        .route("/resume/analyze-match", post(resume::analyze_match))
        .route("/resume/improve-ai", post(resume::improve_ai))
        .route("/resume/score", get(resume::score))
        .route("/resume/{id}", get(resume::get))
        // Settings
        .route(
            "/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route(
            "/settings/",
            get(settings::get_settings).put(settings::update_settings),
        )
}
