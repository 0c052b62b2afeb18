//! Wire-level tests against a local stand-in for the Gemini endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    Json, Router,
};
use gemini_client::{Content, FinishReason, GeminiClient, GeminiError, GenerationConfig};
use serde_json::{json, Value};

#[derive(Clone, Default)]
struct Recorded {
    path: Option<String>,
    api_key: Option<String>,
    body: Option<Value>,
}

#[derive(Clone)]
struct FakeGemini {
    status: StatusCode,
    reply: Value,
    recorded: Arc<Mutex<Recorded>>,
}

async fn handle(
    State(fake): State<FakeGemini>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut recorded = fake.recorded.lock().unwrap();
    recorded.path = Some(uri.path().to_string());
    recorded.api_key = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    recorded.body = Some(body);
    (fake.status, Json(fake.reply.clone()))
}

/// Start a fake endpoint and return a client pointed at it.
async fn fake_gemini(status: StatusCode, reply: Value) -> (GeminiClient, Arc<Mutex<Recorded>>) {
    let recorded = Arc::new(Mutex::new(Recorded::default()));
    let state = FakeGemini {
        status,
        reply,
        recorded: recorded.clone(),
    };
    let app = Router::new().fallback(handle).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = GeminiClient::new("test-key").with_base_url(format!("http://{}", addr));
    (client, recorded)
}

fn text_reply(text: &str, finish_reason: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": finish_reason
        }],
        "usageMetadata": { "promptTokenCount": 10, "candidatesTokenCount": 3, "totalTokenCount": 13 }
    })
}

#[tokio::test]
async fn send_message_replays_history_and_parses_text() {
    let (client, recorded) = fake_gemini(StatusCode::OK, text_reply("It is about rivers.", "STOP")).await;

    let model = client
        .model("gemini-1.5-flash")
        .generation_config(GenerationConfig::new().temperature(1.0).top_k(64))
        .build();
    let mut chat = model.start_chat(vec![Content::user("Here is the text")]);

    let reply = chat.send_message("What is it about?").await.unwrap();

    assert_eq!(reply.text, "It is about rivers.");
    assert_eq!(reply.finish_reason, Some(FinishReason::Stop));
    assert!(!reply.is_content_policy_rejection());
    assert_eq!(reply.usage.unwrap().total_token_count, 13);

    let recorded = recorded.lock().unwrap().clone();
    assert_eq!(
        recorded.path.as_deref(),
        Some("/models/gemini-1.5-flash:generateContent")
    );
    assert_eq!(recorded.api_key.as_deref(), Some("test-key"));

    let body = recorded.body.unwrap();
    let contents = body["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 2);
    assert_eq!(contents[0]["parts"][0]["text"], "Here is the text");
    assert_eq!(contents[1]["role"], "user");
    assert_eq!(contents[1]["parts"][0]["text"], "What is it about?");
    assert_eq!(body["generationConfig"]["topK"], 64);

    assert_eq!(chat.history().len(), 3);
    assert_eq!(chat.history()[2].role, "model");
}

#[tokio::test]
async fn default_model_sends_no_generation_config() {
    let (client, recorded) = fake_gemini(StatusCode::OK, text_reply("ok", "STOP")).await;

    let model = client.model("gemini-1.5-flash").build();
    model
        .start_chat(vec![Content::user("context")])
        .send_message("go")
        .await
        .unwrap();

    let body = recorded.lock().unwrap().body.clone().unwrap();
    assert!(body.get("generationConfig").is_none());
}

#[tokio::test]
async fn recitation_finish_is_reported_as_policy_rejection() {
    let reply = json!({ "candidates": [{ "finishReason": "RECITATION" }] });
    let (client, _) = fake_gemini(StatusCode::OK, reply).await;

    let model = client.model("gemini-1.5-flash").build();
    let response = model
        .start_chat(vec![Content::user("context")])
        .send_message("list chapters")
        .await
        .unwrap();

    assert_eq!(response.text, "");
    assert!(response.is_content_policy_rejection());
    assert_eq!(response.rejection_reason().as_deref(), Some("RECITATION"));
}

#[tokio::test]
async fn blocked_prompt_without_candidates_is_policy_rejection() {
    let reply = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
    let (client, _) = fake_gemini(StatusCode::OK, reply).await;

    let model = client.model("gemini-1.5-flash").build();
    let response = model
        .start_chat(vec![Content::user("context")])
        .send_message("question")
        .await
        .unwrap();

    assert!(response.is_content_policy_rejection());
    assert_eq!(response.block_reason.as_deref(), Some("SAFETY"));
}

#[tokio::test]
async fn empty_candidates_is_api_error() {
    let (client, _) = fake_gemini(StatusCode::OK, json!({ "candidates": [] })).await;

    let model = client.model("gemini-1.5-flash").build();
    let mut chat = model.start_chat(vec![Content::user("context")]);
    let err = chat.send_message("question").await.unwrap_err();

    assert!(matches!(err, GeminiError::Api(_)));
    assert_eq!(chat.history().len(), 1, "failed send must not grow history");
}

#[tokio::test]
async fn error_status_surfaces_api_message() {
    let reply = json!({
        "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" }
    });
    let (client, _) = fake_gemini(StatusCode::BAD_REQUEST, reply).await;

    let model = client.model("gemini-1.5-flash").build();
    let err = model
        .start_chat(vec![Content::user("context")])
        .send_message("question")
        .await
        .unwrap_err();

    match err {
        GeminiError::Api(message) => {
            assert!(message.contains("API key not valid."));
            assert!(message.contains("INVALID_ARGUMENT"));
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GeminiClient::new("test-key").with_base_url(format!("http://{}", addr));
    let model = client.model("gemini-1.5-flash").build();
    let err = model
        .start_chat(vec![Content::user("context")])
        .send_message("question")
        .await
        .unwrap_err();

    assert!(matches!(err, GeminiError::Network(_)));
}
