//! Session domain - per-tab state for one interactive user.

pub mod models;
pub mod store;

pub use models::*;
pub use store::{SessionHandle, SessionStore};
