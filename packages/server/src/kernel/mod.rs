//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod gemini;
pub mod scheduled_tasks;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use gemini::GeminiChatModel;
pub use test_dependencies::{MockChatModel, MockReply, TestDependencies};
pub use traits::*;
