//! Test harness driving the HTTP router in-process.
//!
//! Each harness owns a fresh session store and a scripted mock model, so
//! tests never reach the network and never share state.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use tutor_core::domains::session::SessionStore;
use tutor_core::kernel::test_dependencies::MockChatModel;
use tutor_core::kernel::TestDependencies;
use tutor_core::server::build_app;

/// Upload limit used by every harness.
pub const TEST_UPLOAD_LIMIT: usize = 1024 * 1024;

const BOUNDARY: &str = "tutor-test-boundary";

pub struct TestHarness {
    pub app: Router,
    pub sessions: SessionStore,
    /// Mock model shared with the router - queue replies, inspect calls.
    pub model: Arc<MockChatModel>,
}

/// Status and JSON body of one response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    /// Gets a value at the given JSON path, e.g. `session.exchanges`.
    pub fn get(&self, path: &str) -> Value {
        let mut current = &self.body;
        for key in path.split('.') {
            current = match key.parse::<usize>() {
                Ok(index) => &current[index],
                Err(_) => &current[key],
            };
        }
        current.clone()
    }
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_model(MockChatModel::new())
    }

    pub fn with_model(model: MockChatModel) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let deps = TestDependencies::with_chat_model(model);
        let sessions = SessionStore::new();
        let app = build_app(deps.server_deps(), sessions.clone(), TEST_UPLOAD_LIMIT);

        Self {
            app,
            sessions,
            model: deps.chat_model,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse { status, body }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::DELETE)
                .uri(path)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
    }

    pub async fn post(&self, path: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(path)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
    }

    pub async fn post_json(&self, path: &str, body: Value) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("Failed to build request"),
        )
        .await
    }

    /// Open a session and return its id.
    pub async fn create_session(&self) -> String {
        let response = self.post("/api/sessions").await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["id"]
            .as_str()
            .expect("Session id missing")
            .to_string()
    }

    /// Upload `bytes` as the `file` field of a multipart form.
    pub async fn upload(
        &self,
        session_id: &str,
        file_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> TestResponse {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
                file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(format!("/api/sessions/{}/document", session_id))
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", BOUNDARY),
                )
                .body(Body::from(body))
                .expect("Failed to build request"),
        )
        .await
    }

    /// Open a session and load `pdf` into it.
    pub async fn session_with_document(&self, pdf: &[u8]) -> String {
        let id = self.create_session().await;
        let response = self.upload(&id, "book.pdf", "application/pdf", pdf).await;
        assert_eq!(response.status, StatusCode::OK, "upload failed: {:?}", response.body);
        id
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
