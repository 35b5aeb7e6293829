use serde::Deserialize;

fn default_status() -> String {
    "Applied".to_string()
}

#[derive(Debug, Deserialize)]
pub struct CreateApplication {
    pub job_id: i64,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateApplication {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl UpdateApplication {
    /// Blank strings leave the stored value untouched.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|s| !s.is_empty())
    }
}
