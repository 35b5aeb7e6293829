use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub category: String,
    pub score: i64,
    pub comment: String,
}

/// Body of `POST /resume/analyze-match`. Field names follow the web client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub candidate_name: String,
    pub score: i64,
    pub match_rate: i64,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub detailed_breakdown: Vec<BreakdownItem>,
    pub recommended_fields: Vec<String>,
    pub feedback: String,
}
