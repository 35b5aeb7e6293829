use serde::{Deserialize, Serialize};

use crate::models::Job;

fn default_limit() -> i64 {
    100
}

#[derive(Debug, Deserialize)]
pub struct JobListQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

/// One entry of the job-match listing.
#[derive(Debug, Serialize)]
pub struct JobMatch {
    pub job: Job,
    pub match_percentage: u8,
    pub missing_skills: Vec<String>,
}
