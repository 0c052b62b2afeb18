//! PDF text extraction.
//!
//! Pages are read first to last and their text concatenated exactly as
//! `pdf_extract` emits it. `pdf_extract` can panic on malformed input, so the
//! call is wrapped in [`std::panic::catch_unwind`] and a panic is reported
//! like any other parse failure.

use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

/// The upload could not be read as a PDF. No partial text is returned.
#[derive(Debug, Error)]
pub enum DocumentParseError {
    #[error("The uploaded file is empty")]
    Empty,

    #[error("Could not read PDF: {0}")]
    Invalid(String),

    #[error("Could not read PDF: the document is malformed")]
    Malformed,
}

/// Plain text of a whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: usize,
}

/// Extract the text of every page, in page order.
pub fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, DocumentParseError> {
    if bytes.is_empty() {
        return Err(DocumentParseError::Empty);
    }

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }));

    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(DocumentParseError::Invalid(e.to_string())),
        Err(_) => Err(DocumentParseError::Malformed),
    }
}

/// Extract the whole document as one string.
pub fn extract_text(bytes: &[u8]) -> Result<ExtractedText, DocumentParseError> {
    let pages = extract_pages(bytes)?;

    Ok(ExtractedText {
        page_count: pages.len(),
        text: pages.concat(),
    })
}

/// [`extract_text`] on the blocking pool, for use from request handlers.
pub async fn extract_text_blocking(bytes: Vec<u8>) -> Result<ExtractedText, DocumentParseError> {
    let byte_count = bytes.len();
    let started = std::time::Instant::now();

    let result = tokio::task::spawn_blocking(move || extract_text(&bytes))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "PDF extraction task did not complete");
            DocumentParseError::Malformed
        })?;

    match &result {
        Ok(extracted) => tracing::info!(
            byte_count,
            page_count = extracted.page_count,
            text_length = extracted.text.len(),
            duration_ms = started.elapsed().as_millis(),
            "Extracted PDF text"
        ),
        Err(e) => tracing::warn!(byte_count, error = %e, "PDF extraction failed"),
    }

    result
}
