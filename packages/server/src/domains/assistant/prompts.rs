//! Prompt templates and reply parsing.
//!
//! All templates are plain string concatenation: no truncation, no length
//! budgeting, and identical inputs always give identical prompts.

use gemini_client::GenerationConfig;

use crate::domains::session::Exchange;

/// Instruction sent after the document when listing chapters.
pub const CHAPTER_INSTRUCTION: &str =
    "Please list out the chapter names with their chapter numbers in a clear and concise manner.";

/// Number of multiple-choice items requested per quiz.
pub const QUIZ_ITEM_COUNT: usize = 5;

/// Fixed sampling settings for question answering.
pub fn answer_generation_config() -> GenerationConfig {
    GenerationConfig::new()
        .temperature(1.0)
        .top_p(0.95)
        .top_k(64)
        .max_output_tokens(8192)
        .response_mime_type("text/plain")
}

fn document_preamble(text: &str) -> String {
    format!("Here is the extracted text from the PDF:\n\n{}\n\n", text)
}

/// Chronological "Question: …\nAnswer: …" transcript.
fn transcript(history: &[Exchange]) -> String {
    history
        .iter()
        .map(|e| format!("Question: {}\nAnswer: {}", e.question, e.answer))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt for answering `question` about the document, preceded by the chat
/// history when there is any.
pub fn question_prompt(text: &str, question: &str, history: &[Exchange]) -> String {
    let prompt = format!(
        "{}Answer the following question based on this text:\n\n{}",
        document_preamble(text),
        question
    );

    if history.is_empty() {
        prompt
    } else {
        format!(
            "Here is the chat history:\n{}\n\n{}",
            transcript(history),
            prompt
        )
    }
}

/// Prompt for listing the document's chapters.
pub fn chapter_prompt(text: &str) -> String {
    format!("{}{}", document_preamble(text), CHAPTER_INSTRUCTION)
}

/// Instruction for a quiz on one chapter.
pub fn quiz_instruction(chapter: &str) -> String {
    format!(
        "Create {} interactive multiple-choice quizzes from the chapter: {}",
        QUIZ_ITEM_COUNT, chapter
    )
}

/// Prompt for a quiz on one chapter of the document.
pub fn quiz_prompt(text: &str, chapter: &str) -> String {
    format!("{}{}", document_preamble(text), quiz_instruction(chapter))
}

/// Split a chapter-listing reply into trimmed, non-empty lines in order.
pub fn parse_chapters(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
