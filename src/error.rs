use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

use crate::api::models::FieldError;

const FALLBACK_MESSAGE: &str = "Failed to process document.";

#[derive(Serialize)]
pub struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid request data")]
    InvalidRequest(Vec<FieldError>),

    #[error("Failed to extract text from PDF: {0}")]
    Extraction(String),

    #[error("Failed to generate summary: {0}")]
    Generation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn extraction(cause: impl ToString) -> Self {
        AppError::Extraction(cause_or_unknown(cause.to_string()))
    }

    pub fn generation(cause: impl ToString) -> Self {
        AppError::Generation(cause_or_unknown(cause.to_string()))
    }

    /// Single-field shorthand for a malformed request body.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        AppError::InvalidRequest(vec![FieldError::new(Some(field), message)])
    }

    pub fn invalid_body(message: impl Into<String>) -> Self {
        AppError::InvalidRequest(vec![FieldError::new(None, message)])
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Extraction(_) | AppError::Generation(_) | AppError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

fn cause_or_unknown(cause: String) -> String {
    if cause.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        cause
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut message = self.to_string();
        if message.is_empty() {
            message = FALLBACK_MESSAGE.to_string();
        }

        let errors = match self {
            AppError::InvalidRequest(errors) => Some(errors),
            _ => None,
        };

        let body = Json(ErrorResponse { message, errors });

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::generation(err)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
