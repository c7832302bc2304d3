//! End-to-end chat scenarios over real HTTP against a mock Gemini server

use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tutor::config::TutorConfig;
use tutor::credential::MemoryCredentialStore;
use tutor::display::{RecordingSink, TurnRole};
use tutor::llm::fallback::TransientReason;
use tutor::recovery::RetryPolicy;
use tutor::{ChatSession, ChatSessionBuilder, MessageOutcome, ReplySource, TutorError};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "test-key";

fn endpoint(model: &str) -> String {
    format!("/v1beta/models/{model}:generateContent")
}

fn answer(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

fn config_for(base_url: String) -> TutorConfig {
    TutorConfig {
        base_url,
        request_timeout: Duration::from_secs(5),
        retry: RetryPolicy::new(3, Duration::from_millis(20)),
        ..TutorConfig::default()
    }
}

fn session(config: &TutorConfig, sink: Arc<RecordingSink>) -> ChatSession {
    ChatSessionBuilder::from_config(config, sink)
        .unwrap()
        .credential_store(Arc::new(MemoryCredentialStore::with_value(KEY)))
        .build()
}

async fn server_session(sink: Arc<RecordingSink>) -> (MockServer, ChatSession) {
    let server = MockServer::start().await;
    let config = config_for(format!("{}/v1beta/models", server.uri()));
    let session = session(&config, sink);
    (server, session)
}

#[tokio::test]
async fn quick_reply_makes_no_request() {
    let sink = Arc::new(RecordingSink::new());
    let (server, session) = server_session(sink.clone()).await;

    let outcome = session.handle_message("Hello!").await;

    assert!(matches!(
        outcome.reply().map(|r| &r.source),
        Some(ReplySource::Quick(_))
    ));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn first_model_answers_with_full_request_body() {
    let sink = Arc::new(RecordingSink::new());
    let (server, session) = server_session(sink.clone()).await;

    Mock::given(method("POST"))
        .and(path(endpoint("gemini-2.0-flash")))
        .and(header("x-goog-api-key", KEY))
        .and(body_partial_json(json!({
            "generationConfig": { "maxOutputTokens": 512, "topK": 40 },
            "tools": [{ "googleSearch": {} }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer(
            "\n**Transformers** rely on self-attention.\n",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = session.handle_message("Explain transformers").await;

    let reply = outcome.reply().unwrap();
    assert_eq!(reply.text, "**Transformers** rely on self-attention.");
    assert_eq!(reply.model(), Some("gemini-2.0-flash"));
    assert_eq!(
        sink.turns().last(),
        Some(&(
            TurnRole::Assistant,
            "**Transformers** rely on self-attention.".to_string()
        ))
    );

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.ends_with("USER QUESTION: Explain transformers"));
    assert_eq!(body["safetySettings"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn rate_limited_primary_falls_back_to_second_model() {
    let sink = Arc::new(RecordingSink::new());
    let (server, session) = server_session(sink.clone()).await;

    Mock::given(method("POST"))
        .and(path(endpoint("gemini-2.0-flash")))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(endpoint("gemini-2.0-flash-lite")))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer("From the lite model.")))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = session.handle_message("what is overfitting").await;

    assert_eq!(
        outcome.reply().unwrap().source,
        ReplySource::Model {
            model: "gemini-2.0-flash-lite".to_string(),
            sweeps: 1
        }
    );
    assert!(sink.indicator_updates().is_empty());
}

#[tokio::test]
async fn persistent_rate_limit_retries_every_model() {
    let sink = Arc::new(RecordingSink::new());
    let (server, session) = server_session(sink.clone()).await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .expect(9)
        .mount(&server)
        .await;

    let outcome = session.handle_message("what is overfitting").await;

    assert_eq!(
        outcome,
        MessageOutcome::Failed(TutorError::QuotaExhausted { sweeps: 3 })
    );
    assert_eq!(sink.indicator_updates().len(), 4);
    assert!(sink.last_reply().unwrap().starts_with("API quota exceeded"));
}

#[tokio::test]
async fn bad_request_stops_immediately() {
    let sink = Arc::new(RecordingSink::new());
    let (server, session) = server_session(sink.clone()).await;

    Mock::given(method("POST"))
        .and(path(endpoint("gemini-2.0-flash")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = session.handle_message("what is overfitting").await;

    assert_eq!(
        outcome,
        MessageOutcome::Failed(TutorError::InvalidRequest { status: 400 })
    );
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
    assert!(sink.indicator_updates().is_empty());
}

#[tokio::test]
async fn unreachable_service_reports_network_failure() {
    // Nothing listens on the discard port
    let mut config = config_for("http://127.0.0.1:9/v1beta/models".to_string());
    config.request_timeout = Duration::from_secs(2);
    let sink = Arc::new(RecordingSink::new());
    let session = session(&config, sink.clone());

    let outcome = session.handle_message("what is overfitting").await;

    assert_eq!(
        outcome,
        MessageOutcome::Failed(TutorError::ServiceUnavailable {
            reason: TransientReason::NetworkError
        })
    );
    assert!(sink.input_enabled());
    assert_eq!(sink.visible_indicators(), 0);
}
