use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::document::DocumentError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upload too large: {0}")]
    PayloadTooLarge(String),

    #[error("No text content could be extracted from the file")]
    NoTextExtracted,

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Field extraction failed: {0}")]
    FieldExtractionFailed(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::UnsupportedFormat(_) => {
                AppError::InvalidInput("Only PDF and DOCX files are allowed".to_string())
            }
            DocumentError::ExtractionFailed(msg) => AppError::ExtractionFailed(msg),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) | AppError::NoTextExtracted => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::ExtractionFailed(_)
            | AppError::FieldExtractionFailed(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match &self {
            AppError::InvalidInput(msg) => ("INVALID_INPUT", msg.clone()),
            AppError::PayloadTooLarge(msg) => ("PAYLOAD_TOO_LARGE", msg.clone()),
            AppError::NoTextExtracted => ("NO_TEXT_EXTRACTED", self.to_string()),
            AppError::ExtractionFailed(msg) => {
                tracing::error!("Document extraction error: {msg}");
                ("EXTRACTION_FAILED", msg.clone())
            }
            AppError::FieldExtractionFailed(msg) => {
                tracing::error!("Field extraction error: {msg}");
                (
                    "FIELD_EXTRACTION_FAILED",
                    format!("Failed to extract data from resume: {msg}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
