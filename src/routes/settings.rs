use axum::Json;

use crate::schemas::settings::Settings;

// Settings are not persisted yet: reads return the defaults and writes are echoed.

pub async fn get_settings() -> Json<Settings> {
    Json(Settings::default())
}

pub async fn update_settings(Json(settings): Json<Settings>) -> Json<Settings> {
    Json(settings)
}
