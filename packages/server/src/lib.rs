// PDF Tutor - API Core
//
// Backend for a teaching assistant that answers questions about an uploaded
// PDF, lists its chapters and writes quizzes, using a hosted Gemini model.
//
// Each browser tab owns one in-memory session; nothing is persisted.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
