//! Document text extraction. Binary résumé formats go in, plain text comes
//! out. The parsing itself is delegated to `pdf-extract` and `docx-rs`.

pub mod docx;
pub mod pdf;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    ExtractionFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Picks the format from the file extension, ignoring case.
    pub fn from_file_name(file_name: &str) -> Result<Self, DocumentError> {
        let extension = std::path::Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            _ => Err(DocumentError::UnsupportedFormat(file_name.to_string())),
        }
    }
}

/// Turns document bytes into text. Carried in `AppState` as
/// `Arc<dyn DocumentTextExtractor>` so tests can swap in a fake.
#[async_trait]
pub trait DocumentTextExtractor: Send + Sync {
    async fn extract_text(&self, format: DocumentFormat, bytes: Bytes)
        -> Result<String, DocumentError>;
}

/// Default extractor backed by `pdf-extract` and `docx-rs`. Parsing is CPU
/// bound, so it runs on the blocking pool.
pub struct NativeTextExtractor;

#[async_trait]
impl DocumentTextExtractor for NativeTextExtractor {
    async fn extract_text(
        &self,
        format: DocumentFormat,
        bytes: Bytes,
    ) -> Result<String, DocumentError> {
        let text = tokio::task::spawn_blocking(move || match format {
            DocumentFormat::Pdf => pdf::extract_pdf_text(&bytes),
            DocumentFormat::Docx => docx::extract_docx_text(&bytes),
        })
        .await
        .map_err(|e| DocumentError::ExtractionFailed(format!("Extractor task failed: {e}")))??;

        info!(?format, chars = text.len(), "document text extracted");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension_is_case_insensitive() {
        assert_eq!(
            DocumentFormat::from_file_name("resume.PDF").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_file_name("resume.pdf").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_file_name("My CV.DocX").unwrap(),
            DocumentFormat::Docx
        );
    }

    #[test]
    fn test_other_extensions_are_rejected() {
        for name in ["resume.doc", "resume.txt", "resume", "pdf", "resume.pdf.exe"] {
            assert!(
                matches!(
                    DocumentFormat::from_file_name(name),
                    Err(DocumentError::UnsupportedFormat(_))
                ),
                "{name} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_native_extractor_reports_corrupt_pdf() {
        let result = NativeTextExtractor
            .extract_text(DocumentFormat::Pdf, Bytes::from_static(b"not a pdf"))
            .await;
        assert!(matches!(result, Err(DocumentError::ExtractionFailed(_))));
    }

    #[tokio::test]
    async fn test_native_extractor_reports_corrupt_docx() {
        let result = NativeTextExtractor
            .extract_text(DocumentFormat::Docx, Bytes::from_static(b"PK not a zip"))
            .await;
        assert!(matches!(result, Err(DocumentError::ExtractionFailed(_))));
    }
}
