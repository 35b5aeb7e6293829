use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub auto_apply: bool,
    pub daily_limit: i64,
    pub resume_id: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_apply: true,
            daily_limit: 50,
            resume_id: 1,
        }
    }
}
