use std::collections::HashMap;

use axum::http::HeaderMap;
use bytes::Bytes;

use super::UploadedFile;
use crate::error::AppError;

/// Parts of a `multipart/form-data` body, split into files and text fields.
#[derive(Debug, Default)]
pub struct MultipartForm {
    pub files: HashMap<String, UploadedFile>,
    pub fields: HashMap<String, String>,
}

impl MultipartForm {
    pub fn take_file(&mut self, name: &str) -> Result<UploadedFile, AppError> {
        self.files
            .remove(name)
            .ok_or_else(|| AppError::BadRequest(format!("Missing file field: {name}")))
    }

    pub fn take_field(&mut self, name: &str) -> Result<String, AppError> {
        self.fields
            .remove(name)
            .ok_or_else(|| AppError::BadRequest(format!("Missing form field: {name}")))
    }
}

/// Parse multipart form data using multer.
pub async fn parse_multipart(headers: &HeaderMap, body: Bytes) -> Result<MultipartForm, AppError> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| AppError::BadRequest("Expected a multipart/form-data body".to_string()))?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut form = MultipartForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("unknown").to_string();

        if let Some(filename) = field.file_name().map(str::to_string) {
            let content_type = field.content_type().map(|m| m.to_string());
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("File read error: {e}")))?;
            form.files.insert(
                name,
                UploadedFile {
                    filename,
                    content_type,
                    bytes,
                },
            );
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(format!("Field read error: {e}")))?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}
