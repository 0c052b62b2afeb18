//! Assistant actions - one function per UI event.
//!
//! Each action takes the caller's session explicitly. Remote-model failures
//! never surface as errors: the caller gets an empty result plus an error
//! notice, and the session is left exactly as it was. Only input problems
//! (no document, empty question, unknown chapter) are returned as `Err`.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use super::prompts::{
    answer_generation_config, chapter_prompt, parse_chapters, question_prompt, quiz_instruction,
    quiz_prompt, CHAPTER_INSTRUCTION,
};
use crate::common::Notice;
use crate::domains::session::{Exchange, Session};
use crate::kernel::{BaseChatModel, OneTurnRequest, RemoteCallError};

/// Shown when the model withholds its reply on content-policy grounds.
pub const CONTENT_POLICY_MESSAGE: &str = "The API could not generate a response. Please try again.";

pub const SELECT_CHAPTER_MESSAGE: &str = "Select a chapter to generate quizzes:";
pub const NO_CHAPTERS_MESSAGE: &str = "No chapter names were found in the document.";
pub const TEACHING_IDEAS_MESSAGE: &str = "Generating creative teaching ideas...";
pub const VISUALIZE_MESSAGE: &str = "Visualizing concepts with diagrams and illustrations...";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssistantError {
    #[error("Please upload a PDF first.")]
    NoDocument,

    #[error("Please enter a question.")]
    EmptyQuestion,

    #[error("Unknown chapter: {0}")]
    UnknownChapter(String),
}

/// Result of an action plus the message to show with it.
#[derive(Debug, Clone, Serialize)]
pub struct ActionOutcome<T> {
    pub result: T,
    pub notice: Option<Notice>,
}

impl<T> ActionOutcome<T> {
    fn ok(result: T) -> Self {
        Self {
            result,
            notice: None,
        }
    }

    fn with_notice(result: T, notice: Notice) -> Self {
        Self {
            result,
            notice: Some(notice),
        }
    }
}

/// Run one model call, turning any failure into a user-visible notice.
async fn best_effort(
    model: &dyn BaseChatModel,
    request: OneTurnRequest,
    activity: &str,
) -> Result<String, Notice> {
    match model.one_turn(request).await {
        Ok(text) => Ok(text),
        Err(RemoteCallError::ContentPolicy { reason }) => {
            warn!(activity, reason = %reason, "Model reply withheld");
            Err(Notice::error(CONTENT_POLICY_MESSAGE))
        }
        Err(RemoteCallError::Failed(e)) => {
            warn!(activity, error = %e, "Model call failed");
            Err(Notice::error(format!("An error occurred while {}: {}", activity, e)))
        }
    }
}

fn document_text(session: &Session) -> Result<&str, AssistantError> {
    session
        .document()
        .map(|d| d.text.as_str())
        .ok_or(AssistantError::NoDocument)
}

/// Answer a question about the document and record the exchange.
pub async fn ask_question(
    session: &mut Session,
    model: &dyn BaseChatModel,
    question: &str,
) -> Result<ActionOutcome<String>, AssistantError> {
    let text = document_text(session)?;
    if question.trim().is_empty() {
        return Err(AssistantError::EmptyQuestion);
    }

    let request = OneTurnRequest {
        history_prompt: question_prompt(text, question, session.exchanges()),
        message: question.to_string(),
        generation_config: Some(answer_generation_config()),
    };

    match best_effort(model, request, "fetching the answer").await {
        Ok(answer) => {
            session.append(Exchange::new(question, answer.clone()));
            info!(
                session_id = %session.id(),
                exchange_count = session.exchanges().len(),
                "Question answered"
            );
            Ok(ActionOutcome::ok(answer))
        }
        Err(notice) => Ok(ActionOutcome::with_notice(String::new(), notice)),
    }
}

/// Ask the model for the chapter list and replace the session's chapters.
pub async fn detect_chapters(
    session: &mut Session,
    model: &dyn BaseChatModel,
) -> Result<ActionOutcome<Vec<String>>, AssistantError> {
    let text = document_text(session)?;

    let request = OneTurnRequest {
        history_prompt: chapter_prompt(text),
        message: CHAPTER_INSTRUCTION.to_string(),
        generation_config: None,
    };

    match best_effort(model, request, "listing the chapters").await {
        Ok(raw) => {
            let chapters = parse_chapters(&raw);
            session.replace_chapters(chapters.clone());
            info!(
                session_id = %session.id(),
                chapter_count = chapters.len(),
                "Chapters detected"
            );
            let notice = if chapters.is_empty() {
                Notice::info(NO_CHAPTERS_MESSAGE)
            } else {
                Notice::info(SELECT_CHAPTER_MESSAGE)
            };
            Ok(ActionOutcome::with_notice(chapters, notice))
        }
        Err(notice) => Ok(ActionOutcome::with_notice(Vec::new(), notice)),
    }
}

/// Generate a multiple-choice quiz for one of the detected chapters.
pub async fn create_quiz(
    session: &Session,
    model: &dyn BaseChatModel,
    chapter: &str,
) -> Result<ActionOutcome<String>, AssistantError> {
    let text = document_text(session)?;
    let chapter = chapter.trim();
    if !session.chapters().iter().any(|c| c == chapter) {
        return Err(AssistantError::UnknownChapter(chapter.to_string()));
    }

    let request = OneTurnRequest {
        history_prompt: quiz_prompt(text, chapter),
        message: quiz_instruction(chapter),
        generation_config: None,
    };

    match best_effort(model, request, "creating quizzes").await {
        Ok(quiz) => {
            info!(session_id = %session.id(), chapter, "Quiz created");
            Ok(ActionOutcome::ok(quiz))
        }
        Err(notice) => Ok(ActionOutcome::with_notice(String::new(), notice)),
    }
}

/// Sidebar "Generate Teaching Ideas" action.
pub fn teaching_ideas() -> ActionOutcome<()> {
    ActionOutcome::with_notice((), Notice::info(TEACHING_IDEAS_MESSAGE))
}

/// Sidebar "Visualize Concepts" action.
pub fn visualize_concepts() -> ActionOutcome<()> {
    ActionOutcome::with_notice((), Notice::info(VISUALIZE_MESSAGE))
}
