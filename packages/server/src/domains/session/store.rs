use chrono::Duration;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use super::models::{Session, SessionId};

/// Shared handle to one session.
///
/// Handlers hold the lock for the whole event, remote call included, so
/// events of one session run one at a time.
pub type SessionHandle = Arc<Mutex<Session>>;

/// In-memory session store
///
/// Sessions live until deleted or idle past the cleanup threshold.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionHandle>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new session and return its id and handle
    pub async fn create_session(&self) -> (SessionId, SessionHandle) {
        let id = SessionId::new();
        let handle = Arc::new(Mutex::new(Session::new(id)));
        let mut sessions = self.sessions.write().await;
        sessions.insert(id, handle.clone());
        (id, handle)
    }

    /// Get session by id
    pub async fn get_session(&self, id: &SessionId) -> Option<SessionHandle> {
        let sessions = self.sessions.read().await;
        sessions.get(id).cloned()
    }

    /// Delete session (tab closed). Returns whether it existed.
    pub async fn delete_session(&self, id: &SessionId) -> bool {
        let mut sessions = self.sessions.write().await;
        sessions.remove(id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drop sessions idle for longer than `max_idle` (run periodically).
    ///
    /// A session whose lock is held is mid-event and always kept.
    pub async fn cleanup_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let now = chrono::Utc::now();
        let before = sessions.len();

        sessions.retain(|_, handle| match handle.try_lock() {
            Ok(session) => now.signed_duration_since(session.last_active()) < max_idle,
            Err(_) => true,
        });

        before - sessions.len()
    }
}
