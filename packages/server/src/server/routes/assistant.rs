use axum::{
    extract::{Extension, Path},
    Json,
};
use serde::Deserialize;

use super::ActionResponse;
use crate::domains::assistant::{
    ask_question, create_quiz, detect_chapters, teaching_ideas, visualize_concepts,
};
use crate::domains::session::SessionId;
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub chapter: String,
}

/// Answer a question about the uploaded document
pub async fn ask_question_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<SessionId>,
    Json(body): Json<QuestionRequest>,
) -> Result<Json<ActionResponse<String>>, ApiError> {
    let handle = state.session(&id).await?;
    let mut session = handle.lock().await;
    session.touch();

    let outcome = ask_question(&mut session, state.deps.chat_model.as_ref(), &body.question).await?;
    Ok(Json(ActionResponse::from_outcome(outcome, &session)))
}

/// List the document's chapters
pub async fn detect_chapters_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<SessionId>,
) -> Result<Json<ActionResponse<Vec<String>>>, ApiError> {
    let handle = state.session(&id).await?;
    let mut session = handle.lock().await;
    session.touch();

    let outcome = detect_chapters(&mut session, state.deps.chat_model.as_ref()).await?;
    Ok(Json(ActionResponse::from_outcome(outcome, &session)))
}

/// Generate a quiz for one detected chapter
pub async fn create_quiz_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<SessionId>,
    Json(body): Json<QuizRequest>,
) -> Result<Json<ActionResponse<String>>, ApiError> {
    let handle = state.session(&id).await?;
    let mut session = handle.lock().await;
    session.touch();

    let outcome = create_quiz(&session, state.deps.chat_model.as_ref(), &body.chapter).await?;
    Ok(Json(ActionResponse::from_outcome(outcome, &session)))
}

pub async fn teaching_ideas_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<SessionId>,
) -> Result<Json<ActionResponse<()>>, ApiError> {
    let handle = state.session(&id).await?;
    let mut session = handle.lock().await;
    session.touch();

    Ok(Json(ActionResponse::from_outcome(teaching_ideas(), &session)))
}

pub async fn visualize_concepts_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<SessionId>,
) -> Result<Json<ActionResponse<()>>, ApiError> {
    let handle = state.session(&id).await?;
    let mut session = handle.lock().await;
    session.touch();

    Ok(Json(ActionResponse::from_outcome(visualize_concepts(), &session)))
}
