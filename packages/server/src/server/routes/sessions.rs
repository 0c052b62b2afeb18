use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};

use crate::domains::session::{SessionId, SessionView};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Open a new, empty session
pub async fn create_session_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<SessionView>) {
    let (id, handle) = state.sessions.create_session().await;
    let view = handle.lock().await.view();

    tracing::info!(session_id = %id, "Session created");
    (StatusCode::CREATED, Json(view))
}

/// Current state of a session
pub async fn get_session_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<SessionId>,
) -> Result<Json<SessionView>, ApiError> {
    let handle = state.session(&id).await?;
    let mut session = handle.lock().await;
    session.touch();
    Ok(Json(session.view()))
}

/// Close a session and drop its state
pub async fn delete_session_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<SessionId>,
) -> Result<StatusCode, ApiError> {
    if state.sessions.delete_session(&id).await {
        tracing::info!(session_id = %id, "Session closed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::SessionNotFound)
    }
}
