use std::sync::Arc;

use sqlx::AnyPool;

use crate::analysis::GenerativeModel;
use crate::config::Config;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: AnyPool,
    pub config: Config,
    pub model: Arc<dyn GenerativeModel>,
}
