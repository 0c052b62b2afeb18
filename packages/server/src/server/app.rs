//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Extension},
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::session::{SessionHandle, SessionId, SessionStore};
use crate::kernel::ServerDeps;
use crate::server::error::ApiError;
use crate::server::routes::{
    ask_question_handler, create_quiz_handler, create_session_handler, delete_session_handler,
    detect_chapters_handler, get_session_handler, health_handler, teaching_ideas_handler,
    upload_document_handler, visualize_concepts_handler,
};
use crate::server::static_files::serve_ui;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub deps: Arc<ServerDeps>,
}

impl AppState {
    /// Look up the session a request refers to.
    pub async fn session(&self, id: &SessionId) -> Result<SessionHandle, ApiError> {
        self.sessions
            .get_session(id)
            .await
            .ok_or(ApiError::SessionNotFound)
    }
}

/// Build the Axum application router
///
/// `sessions` is passed in so the caller can share it with the idle sweep.
pub fn build_app(deps: ServerDeps, sessions: SessionStore, max_upload_bytes: usize) -> Router {
    let app_state = AppState {
        sessions,
        deps: Arc::new(deps),
    };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    let api = Router::new()
        .route("/sessions", post(create_session_handler))
        .route(
            "/sessions/:id",
            get(get_session_handler).delete(delete_session_handler),
        )
        .route("/sessions/:id/document", post(upload_document_handler))
        .route("/sessions/:id/questions", post(ask_question_handler))
        .route("/sessions/:id/chapters", post(detect_chapters_handler))
        .route("/sessions/:id/quizzes", post(create_quiz_handler))
        .route("/sessions/:id/teaching-ideas", post(teaching_ideas_handler))
        .route("/sessions/:id/visualizations", post(visualize_concepts_handler));

    Router::new()
        .nest("/api", api)
        // Health check
        .route("/health", get(health_handler))
        // Single-page UI (embedded)
        .fallback(serve_ui)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
