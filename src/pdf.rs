use tokio::task;
use tracing::{debug, info};
use crate::error::{AppError, Result};

/// Uploads are buffered whole; anything over this is rejected before extraction.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn looks_like_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF-")
}

/// Extracts the text of every page, in the order `pdf-extract` yields it.
///
/// Parsing runs on the blocking pool. Malformed or encrypted documents, and
/// panics raised inside the parser, all surface as [`AppError::Extraction`].
pub async fn extract_text(bytes: Vec<u8>) -> Result<String> {
    debug!(bytes = bytes.len(), "Extracting text from PDF");

    let text = task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| {
            if e.is_panic() {
                AppError::extraction("PDF parser panicked on malformed input")
            } else {
                AppError::extraction(e)
            }
        })?
        .map_err(AppError::extraction)?;

    info!(chars = text.chars().count(), "Extracted text from PDF");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_bytes_identify_pdfs() {
        assert!(looks_like_pdf(b"%PDF-1.7\n%..."));
        assert!(!looks_like_pdf(b"PK\x03\x04"));
        assert!(!looks_like_pdf(b""));
    }

    #[tokio::test]
    async fn garbage_bytes_fail_extraction() {
        let err = extract_text(b"this is definitely not a pdf".to_vec())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
        assert!(err.to_string().starts_with("Failed to extract text from PDF: "));
    }

    #[tokio::test]
    async fn empty_upload_fails_extraction() {
        let err = extract_text(Vec::new()).await.unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[tokio::test]
    async fn truncated_pdf_fails_extraction() {
        let err = extract_text(b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog".to_vec())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}
