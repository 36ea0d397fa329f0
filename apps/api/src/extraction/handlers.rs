//! Axum route handlers for the résumé extraction API.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::document::DocumentFormat;
use crate::errors::AppError;
use crate::extraction::models::ResumeRecord;
use crate::extraction::pipeline::extract_resume;
use crate::state::AppState;

const FILE_FIELD: &str = "file";

struct Upload {
    file_name: String,
    bytes: Bytes,
}

/// POST /api/v1/resumes/parse
///
/// Multipart upload with a `file` part (.pdf or .docx). Returns the extracted
/// `ResumeRecord`, possibly sparse.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ResumeRecord>, AppError> {
    let mut multipart =
        multipart.map_err(|_| AppError::InvalidInput("No file provided".to_string()))?;
    let upload = read_upload(&mut multipart).await?;

    info!(
        file_name = %upload.file_name,
        size = upload.bytes.len(),
        "received resume upload"
    );

    let format = DocumentFormat::from_file_name(&upload.file_name)?;
    let text = state.extractor.extract_text(format, upload.bytes).await?;

    if text.trim().is_empty() {
        return Err(AppError::NoTextExtracted);
    }

    let record = tokio::task::spawn_blocking(move || extract_resume(&text))
        .await
        .map_err(|e| AppError::FieldExtractionFailed(e.to_string()))?;

    info!(
        education = record.education.len(),
        skills = record.skills.all().len(),
        skills_found = !record.skills.is_empty(),
        experience = record.experience.len(),
        projects = record.projects.len(),
        certifications = record.certifications.len(),
        "resume parsed"
    );

    Ok(Json(record))
}

async fn read_upload(multipart: &mut Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(upload_error)?;
        return Ok(Upload { file_name, bytes });
    }

    Err(AppError::InvalidInput("No file provided".to_string()))
}

fn upload_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::InvalidInput(format!("Malformed upload: {err}"))
    }
}
