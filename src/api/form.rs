//! Request extraction for `POST /api/summarize`.
//!
//! The endpoint takes the same logical fields as multipart (with an optional
//! `file` part), URL-encoded, or JSON bodies.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use tracing::debug;

use crate::api::models::{DemoFlag, SummarizeFields, SummarizeRequest, UploadedFile};
use crate::error::{AppError, Result};
use crate::pdf::MAX_UPLOAD_BYTES;

#[async_trait]
impl<S> FromRequest<S> for SummarizeRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_ascii_lowercase());

        match content_type.as_deref() {
            None => Ok(SummarizeFields::default().into_request(None)),
            Some(ct) if ct.starts_with("multipart/form-data") => {
                let multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|e| AppError::invalid_body(e.body_text()))?;
                parse_multipart(multipart).await
            }
            Some(ct) if ct.starts_with("application/json") => {
                let Json(fields) = Json::<SummarizeFields>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::invalid_body(e.body_text()))?;
                Ok(fields.into_request(None))
            }
            Some(ct) if ct.starts_with("application/x-www-form-urlencoded") => {
                let Form(fields) = Form::<SummarizeFields>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::invalid_body(e.body_text()))?;
                Ok(fields.into_request(None))
            }
            Some(other) => Err(AppError::invalid_body(format!(
                "Unsupported content type: {}",
                other
            ))),
        }
    }
}

async fn parse_multipart(mut multipart: Multipart) -> Result<SummarizeRequest> {
    let mut fields = SummarizeFields::default();
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::invalid_body(format!("Failed to read form field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload.pdf").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::invalid_field("file", format!("Failed to read file data: {}", e)))?;

                if data.len() > MAX_UPLOAD_BYTES {
                    return Err(AppError::invalid_field(
                        "file",
                        format!("File exceeds the {} MiB upload limit", MAX_UPLOAD_BYTES / (1024 * 1024)),
                    ));
                }

                debug!(filename = %filename, bytes = data.len(), "Received file part");
                file = Some(UploadedFile {
                    filename,
                    content_type,
                    data: data.to_vec(),
                });
            }
            "content" => fields.content = Some(read_text(field, "content").await?),
            "question" => fields.question = Some(read_text(field, "question").await?),
            "language" => fields.language = Some(read_text(field, "language").await?),
            "useDemo" => fields.use_demo = Some(DemoFlag::Text(read_text(field, "useDemo").await?)),
            _ => {
                // Unknown fields are drained and dropped
                field.bytes().await.map_err(|e| {
                    AppError::invalid_field(&name, format!("Failed to read {}: {}", name, e))
                })?;
            }
        }
    }

    Ok(fields.into_request(file))
}

async fn read_text(field: axum::extract::multipart::Field<'_>, name: &str) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::invalid_field(name, format!("Failed to read {}: {}", name, e)))
}
