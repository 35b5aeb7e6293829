use serde_json::Value;

use crate::schemas::analysis::{AnalysisResponse, BreakdownItem};

pub const DEFAULT_CANDIDATE_NAME: &str = "Applicant";

/// Builds the response from a model reply, filling defaults for missing keys.
pub fn shape(reply: &Value) -> AnalysisResponse {
    AnalysisResponse {
        candidate_name: candidate_name(reply),
        score: integer(reply.get("score")).unwrap_or(0),
        match_rate: integer(reply.get("matchRate")).unwrap_or(0),
        strengths: strings(reply.get("strengths"))
            .unwrap_or_else(|| vec!["No strengths identified".to_string()]),
        gaps: strings(reply.get("gaps"))
            .unwrap_or_else(|| vec!["No specific gaps identified".to_string()]),
        detailed_breakdown: breakdown(reply.get("detailedBreakdown")).unwrap_or_else(|| {
            vec![BreakdownItem {
                category: "General".to_string(),
                score: 0,
                comment: "Low match detected.".to_string(),
            }]
        }),
        recommended_fields: strings(reply.get("recommendedFields"))
            .unwrap_or_else(|| vec!["General Roles".to_string()]),
        feedback: reply
            .get("feedback")
            .and_then(Value::as_str)
            .unwrap_or("Analysis complete.")
            .to_string(),
    }
}

/// The canned payload returned whenever the model call fails.
pub fn fallback(message: &str) -> AnalysisResponse {
    AnalysisResponse {
        candidate_name: DEFAULT_CANDIDATE_NAME.to_string(),
        score: 50,
        match_rate: 45,
        strengths: vec!["Document received".to_string()],
        gaps: vec![format!("AI Analysis failed: {message}")],
        detailed_breakdown: vec![BreakdownItem {
            category: "Status".to_string(),
            score: 50,
            comment: "Analysis engine error.".to_string(),
        }],
        recommended_fields: vec!["Pending Analysis".to_string()],
        feedback: "We encountered an error connecting to our AI engine. Please ensure your GEMINI_API_KEY is valid.".to_string(),
    }
}

/// Columns stored on the resume row for a successful analysis.
pub struct StoredAnalysis {
    pub candidate_name: String,
    pub recommended_fields: Vec<String>,
    pub score: f64,
}

pub fn stored(reply: &Value) -> StoredAnalysis {
    StoredAnalysis {
        candidate_name: candidate_name(reply),
        recommended_fields: strings(reply.get("recommendedFields")).unwrap_or_default(),
        score: number(reply.get("score")).unwrap_or(0.0),
    }
}

fn candidate_name(reply: &Value) -> String {
    reply
        .get("candidateName")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_CANDIDATE_NAME)
        .to_string()
}

/// Accepts JSON numbers and numeric strings; models are not strict about either.
fn number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn integer(value: Option<&Value>) -> Option<i64> {
    number(value).map(|n| n.round() as i64)
}

fn strings(value: Option<&Value>) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
    )
}

fn breakdown(value: Option<&Value>) -> Option<Vec<BreakdownItem>> {
    let items = value?.as_array()?;
    Some(
        items
            .iter()
            .filter(|item| item.is_object())
            .map(|item| BreakdownItem {
                category: item
                    .get("category")
                    .and_then(Value::as_str)
                    .unwrap_or("General")
                    .to_string(),
                score: integer(item.get("score")).unwrap_or(0),
                comment: item
                    .get("comment")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_reply_gets_documented_defaults() {
        let shaped = shape(&json!({}));
        assert_eq!(shaped.candidate_name, "Applicant");
        assert_eq!(shaped.score, 0);
        assert_eq!(shaped.match_rate, 0);
        assert_eq!(shaped.strengths, vec!["No strengths identified"]);
        assert_eq!(shaped.gaps, vec!["No specific gaps identified"]);
        assert_eq!(shaped.detailed_breakdown.len(), 1);
        assert_eq!(shaped.detailed_breakdown[0].category, "General");
        assert_eq!(shaped.detailed_breakdown[0].comment, "Low match detected.");
        assert_eq!(shaped.recommended_fields, vec!["General Roles"]);
        assert_eq!(shaped.feedback, "Analysis complete.");
    }

    #[test]
    fn full_reply_is_read_through() {
        let shaped = shape(&json!({
            "candidateName": "Jane Doe",
            "score": 82,
            "matchRate": 77.6,
            "strengths": ["Rust", "Postgres", "Mentoring"],
            "gaps": ["Kubernetes"],
            "detailedBreakdown": [
                { "category": "Skills", "score": "90", "comment": "Strong" },
                { "category": "Experience", "score": 70, "comment": "Solid" }
            ],
            "recommendedFields": ["Backend Engineering"],
            "feedback": "Good fit."
        }));

        assert_eq!(shaped.candidate_name, "Jane Doe");
        assert_eq!(shaped.score, 82);
        assert_eq!(shaped.match_rate, 78);
        assert_eq!(shaped.strengths.len(), 3);
        assert_eq!(shaped.gaps, vec!["Kubernetes"]);
        assert_eq!(
            shaped.detailed_breakdown[0],
            BreakdownItem {
                category: "Skills".to_string(),
                score: 90,
                comment: "Strong".to_string(),
            }
        );
        assert_eq!(shaped.recommended_fields, vec!["Backend Engineering"]);
        assert_eq!(shaped.feedback, "Good fit.");
    }

    #[test]
    fn wrong_types_fall_back_to_defaults() {
        let shaped = shape(&json!({ "strengths": "Rust", "score": true, "candidateName": null }));
        assert_eq!(shaped.strengths, vec!["No strengths identified"]);
        assert_eq!(shaped.score, 0);
        assert_eq!(shaped.candidate_name, "Applicant");
    }

    #[test]
    fn fallback_is_fixed_apart_from_the_message() {
        let payload = fallback("boom");
        assert_eq!(payload.score, 50);
        assert_eq!(payload.match_rate, 45);
        assert_eq!(payload.strengths, vec!["Document received"]);
        assert_eq!(payload.gaps, vec!["AI Analysis failed: boom"]);
        assert_eq!(payload.detailed_breakdown[0].category, "Status");
        assert_eq!(payload.recommended_fields, vec!["Pending Analysis"]);
    }

    #[test]
    fn stored_columns_use_their_own_defaults() {
        let columns = stored(&json!({ "score": 64.5 }));
        assert_eq!(columns.candidate_name, "Applicant");
        assert!(columns.recommended_fields.is_empty());
        assert_eq!(columns.score, 64.5);
    }

    #[test]
    fn serializes_with_client_field_names() {
        let body = serde_json::to_value(fallback("x")).unwrap();
        assert_eq!(body["candidateName"], "Applicant");
        assert_eq!(body["matchRate"], 45);
        assert!(body["detailedBreakdown"].is_array());
        assert!(body["recommendedFields"].is_array());
    }
}
