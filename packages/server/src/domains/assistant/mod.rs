//! Assistant domain - prompts and actions backed by the remote model.

pub mod actions;
pub mod prompts;

pub use actions::{
    ask_question, create_quiz, detect_chapters, teaching_ideas, visualize_concepts,
    ActionOutcome, AssistantError,
};
