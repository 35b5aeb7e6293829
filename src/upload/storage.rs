use std::path::Path;

use uuid::Uuid;

use crate::error::AppError;

/// Public prefix under which stored uploads are referenced.
pub const URL_PREFIX: &str = "/uploads";

/// Writes an upload under a generated name and returns its reference path.
pub async fn save(dir: &Path, original_name: &str, bytes: &[u8]) -> Result<String, AppError> {
    tokio::fs::create_dir_all(dir).await?;

    let stored_name = format!("{}.{}", Uuid::now_v7(), extension(original_name));
    tokio::fs::write(dir.join(&stored_name), bytes).await?;

    tracing::debug!("Stored upload {original_name} as {stored_name}");
    Ok(format!("{URL_PREFIX}/{stored_name}"))
}

fn extension(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.len() <= 8 && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| "bin".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_safe_extensions_only() {
        assert_eq!(extension("Resume.PDF"), "pdf");
        assert_eq!(extension("../../etc/passwd"), "bin");
        assert_eq!(extension("weird.p d f"), "bin");
        assert_eq!(extension("noext"), "bin");
    }

    #[tokio::test]
    async fn writes_bytes_under_generated_name() {
        let dir = tempfile::tempdir().unwrap();
        let reference = save(dir.path(), "cv.pdf", b"%PDF-1.4").await.unwrap();

        let stored_name = reference.strip_prefix("/uploads/").unwrap();
        assert!(stored_name.ends_with(".pdf"));
        let written = std::fs::read(dir.path().join(stored_name)).unwrap();
        assert_eq!(written, b"%PDF-1.4");
    }
}
