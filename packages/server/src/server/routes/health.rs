use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::server::app::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub active_sessions: usize,
}

/// Health check endpoint
///
/// Liveness only: reports the configured model and how many sessions are
/// open. The model endpoint is not probed.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let active_sessions = state.sessions.len().await;

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            model: state.deps.chat_model.model_name().to_string(),
            active_sessions,
        }),
    )
}
