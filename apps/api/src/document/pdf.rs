use tracing::warn;

use crate::document::DocumentError;

pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, DocumentError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
        warn!("PDF extraction failed: {e}");
        DocumentError::ExtractionFailed(format!("Failed to parse PDF file: {e}"))
    })
}
