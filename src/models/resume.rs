use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};

use super::Timestamp;

/// A stored resume. `parsed_data` holds either the upload placeholder or
/// `{"analysis": <model reply>}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub id: i64,
    pub user_id: i64,
    pub file_path: Option<String>,
    pub parsed_data: Option<Value>,
    pub candidate_name: Option<String>,
    pub recommended_fields: Option<Vec<String>>,
    pub score: Option<f64>,
    pub created_at: Timestamp,
}

impl<'r> FromRow<'r, AnyRow> for Resume {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        let created_at: String = row.try_get("created_at")?;

        Ok(Resume {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            file_path: row.try_get("file_path")?,
            parsed_data: json_column(row, "parsed_data")?,
            candidate_name: row.try_get("candidate_name")?,
            recommended_fields: json_column(row, "recommended_fields")?,
            score: row.try_get("score")?,
            created_at: Timestamp::try_from(created_at).map_err(|e| sqlx::Error::ColumnDecode {
                index: "created_at".to_string(),
                source: Box::new(e),
            })?,
        })
    }
}

/// Nullable JSON stored as text.
fn json_column<T: DeserializeOwned>(row: &AnyRow, column: &str) -> Result<Option<T>, sqlx::Error> {
    let Some(text) = row.try_get::<Option<String>, _>(column)? else {
        return Ok(None);
    };
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: Box::new(e),
        })
}
