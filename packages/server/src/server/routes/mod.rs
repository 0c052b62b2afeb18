// HTTP routes
pub mod assistant;
pub mod documents;
pub mod health;
pub mod sessions;

pub use assistant::*;
pub use documents::*;
pub use health::*;
pub use sessions::*;

use serde::Serialize;

use crate::common::Notice;
use crate::domains::assistant::ActionOutcome;
use crate::domains::session::{Session, SessionView};

/// Body of every action response: the result, an optional message for the
/// user and the session state after the action.
#[derive(Debug, Serialize)]
pub struct ActionResponse<T> {
    pub result: T,
    pub notice: Option<Notice>,
    pub session: SessionView,
}

impl<T> ActionResponse<T> {
    pub fn from_outcome(outcome: ActionOutcome<T>, session: &Session) -> Self {
        Self {
            result: outcome.result,
            notice: outcome.notice,
            session: session.view(),
        }
    }
}
