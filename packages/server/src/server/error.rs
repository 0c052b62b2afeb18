//! HTTP error mapping.

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domains::assistant::AssistantError;
use crate::domains::documents::DocumentParseError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Session not found")]
    SessionNotFound,

    #[error("Only PDF files can be uploaded")]
    UnsupportedMediaType,

    #[error("No file was included in the upload")]
    MissingFile,

    #[error("Invalid upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Document(#[from] DocumentParseError),

    #[error(transparent)]
    Assistant(#[from] AssistantError),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::SessionNotFound => StatusCode::NOT_FOUND,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::MissingFile => StatusCode::BAD_REQUEST,
            ApiError::Multipart(e) => e.status(),
            ApiError::Document(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Assistant(AssistantError::NoDocument) => StatusCode::CONFLICT,
            ApiError::Assistant(AssistantError::EmptyQuestion) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Assistant(AssistantError::UnknownChapter(_)) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
        }

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
