//! GeminiClient against a local stand-in for the `generateContent` endpoint.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::post,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

use brainstorm_studio::clients::{GeminiClient, GenerationError, TextGenerator};

#[derive(Clone, Default)]
struct Captured {
    calls: Arc<Mutex<Vec<(String, Option<String>, Value)>>>,
}

/// Spawn a fake Gemini API answering every call with `status` and `reply`.
async fn spawn_fake_gemini(status: StatusCode, reply: Value) -> (String, Captured) {
    let captured = Captured::default();
    let app = Router::new()
        .route(
            "/v1beta/models/:call",
            post(
                move |State(captured): State<Captured>,
                      Path(call): Path<String>,
                      headers: HeaderMap,
                      Json(body): Json<Value>| {
                    let reply = reply.clone();
                    async move {
                        let key = headers
                            .get("x-goog-api-key")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        captured.calls.lock().unwrap().push((call, key, body));
                        (status, Json(reply))
                    }
                },
            ),
        )
        .with_state(captured.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}/v1beta", addr), captured)
}

#[tokio::test]
async fn sends_prompt_as_single_part_and_returns_text() {
    let (base, captured) = spawn_fake_gemini(
        StatusCode::OK,
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "## Summary\n"}, {"text": "Drill down."}]},
                "finishReason": "STOP"
            }]
        }),
    )
    .await;

    let client = GeminiClient::new("test-key", "gemini-2.5-flash").with_api_base(base);
    let output = client.generate("Apply the 5 Whys").await.unwrap();
    assert_eq!(output, "## Summary\nDrill down.");

    let calls = captured.calls.lock().unwrap().clone();
    assert_eq!(calls.len(), 1);
    let (call, key, body) = &calls[0];
    assert_eq!(call, "gemini-2.5-flash:generateContent");
    assert_eq!(key.as_deref(), Some("test-key"));
    assert_eq!(
        body,
        &json!({"contents": [{"parts": [{"text": "Apply the 5 Whys"}]}]})
    );
}

#[tokio::test]
async fn api_error_message_is_surfaced() {
    let (base, captured) = spawn_fake_gemini(
        StatusCode::BAD_REQUEST,
        json!({
            "error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}
        }),
    )
    .await;

    let client = GeminiClient::new("bad-key", "gemini-2.5-flash").with_api_base(base);
    let err = client.generate("prompt").await.unwrap_err();
    assert_eq!(
        err,
        GenerationError::CallFailed("400 INVALID_ARGUMENT. API key not valid.".to_string())
    );
    // no retries
    assert_eq!(captured.calls.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn empty_candidates_are_a_failure() {
    let (base, _captured) = spawn_fake_gemini(StatusCode::OK, json!({"candidates": []})).await;

    let client = GeminiClient::new("k", "gemini-2.5-flash").with_api_base(base);
    let err = client.generate("prompt").await.unwrap_err();
    assert!(matches!(err, GenerationError::CallFailed(m) if m.contains("no candidates")));
}

#[tokio::test]
async fn unreachable_service_is_a_failure() {
    // bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GeminiClient::new("k", "gemini-2.5-flash")
        .with_api_base(format!("http://{}/v1beta", addr));
    let err = client.generate("prompt").await.unwrap_err();
    assert!(
        matches!(err, GenerationError::CallFailed(m) if m.starts_with("request to Gemini API failed"))
    );
}
