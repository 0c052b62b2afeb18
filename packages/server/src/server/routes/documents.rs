use axum::{
    extract::{Extension, Multipart, Path},
    Json,
};
use serde::Serialize;

use super::ActionResponse;
use crate::common::Notice;
use crate::domains::documents::extract_text_blocking;
use crate::domains::session::{Document, SessionId};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Multipart field carrying the PDF.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct DocumentSummary {
    pub file_name: Option<String>,
    pub page_count: usize,
    pub text_length: usize,
}

struct Upload {
    file_name: Option<String>,
    bytes: Vec<u8>,
}

fn is_pdf(content_type: Option<&str>, file_name: Option<&str>) -> bool {
    let by_type = content_type
        .map(|ct| ct.eq_ignore_ascii_case("application/pdf"))
        .unwrap_or(false);
    let by_name = file_name
        .map(|name| name.to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false);
    by_type || by_name
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        if !is_pdf(field.content_type(), file_name.as_deref()) {
            return Err(ApiError::UnsupportedMediaType);
        }

        let bytes = field.bytes().await?;
        return Ok(Upload {
            file_name,
            bytes: bytes.to_vec(),
        });
    }

    Err(ApiError::MissingFile)
}

/// Upload a PDF and make its text the session's document
///
/// A file that cannot be parsed leaves the previous document in place.
pub async fn upload_document_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<SessionId>,
    multipart: Multipart,
) -> Result<Json<ActionResponse<DocumentSummary>>, ApiError> {
    let handle = state.session(&id).await?;
    let upload = read_upload(multipart).await?;

    let mut session = handle.lock().await;
    session.touch();

    let extracted = extract_text_blocking(upload.bytes).await?;

    let summary = DocumentSummary {
        file_name: upload.file_name.clone(),
        page_count: extracted.page_count,
        text_length: extracted.text.len(),
    };
    let notice = if extracted.text.trim().is_empty() {
        Notice::info("No text could be extracted from this PDF.")
    } else {
        Notice::info(format!(
            "Extracted text from {} page{}.",
            extracted.page_count,
            if extracted.page_count == 1 { "" } else { "s" }
        ))
    };

    session.load_document(Document {
        file_name: upload.file_name,
        text: extracted.text,
        page_count: extracted.page_count,
    });
    tracing::info!(
        session_id = %id,
        page_count = summary.page_count,
        text_length = summary.text_length,
        "Document loaded"
    );

    Ok(Json(ActionResponse {
        result: summary,
        notice: Some(notice),
        session: session.view(),
    }))
}
