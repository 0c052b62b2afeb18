//! Per-session state: the uploaded document, chat history and chapter names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier handed to the browser when a session is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One question and the answer it got.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
}

impl Exchange {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Text of the uploaded PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub file_name: Option<String>,
    pub text: String,
    pub page_count: usize,
}

/// State owned by one interactive session.
///
/// Exchanges are append-only. Chapters and the document are only ever
/// replaced as a whole.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    document: Option<Document>,
    exchanges: Vec<Exchange>,
    chapters: Vec<String>,
    created_at: DateTime<Utc>,
    last_active: DateTime<Utc>,
}

impl Session {
    pub fn new(id: SessionId) -> Self {
        let now = Utc::now();
        Self {
            id,
            document: None,
            exchanges: Vec::new(),
            chapters: Vec::new(),
            created_at: now,
            last_active: now,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Replace the current document with a newly extracted one.
    pub fn load_document(&mut self, document: Document) {
        self.document = Some(document);
    }

    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    pub fn append(&mut self, exchange: Exchange) {
        self.exchanges.push(exchange);
    }

    pub fn chapters(&self) -> &[String] {
        &self.chapters
    }

    pub fn replace_chapters(&mut self, chapters: Vec<String>) {
        self.chapters = chapters;
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_active(&self) -> DateTime<Utc> {
        self.last_active
    }

    /// Record activity so the idle sweep leaves the session alone.
    pub fn touch(&mut self) {
        self.last_active = Utc::now();
    }

    #[cfg(test)]
    pub(crate) fn set_last_active(&mut self, at: DateTime<Utc>) {
        self.last_active = at;
    }

    /// Snapshot for the client.
    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id,
            document: self.document.as_ref().map(|d| DocumentView {
                file_name: d.file_name.clone(),
                page_count: d.page_count,
                text: d.text.clone(),
            }),
            exchanges: self.exchanges.clone(),
            chapters: self.chapters.clone(),
            created_at: self.created_at,
        }
    }
}

/// Serialized session state returned with every response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub id: SessionId,
    pub document: Option<DocumentView>,
    pub exchanges: Vec<Exchange>,
    pub chapters: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentView {
    pub file_name: Option<String>,
    pub page_count: usize,
    pub text: String,
}
