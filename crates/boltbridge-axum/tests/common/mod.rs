//! Shared fixtures for boltbridge-axum integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use boltbridge_axum::{ApiKey, ServerConfig, bootstrap_with_provider, create_router};
use boltbridge_core::{
    ChatMessage, CompletionError, CompletionProvider, CompletionReply, RetryPolicy,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Secret configured on every test server.
pub const TEST_API_KEY: &str = "test-secret";

pub type Scripted = Result<CompletionReply, CompletionError>;

/// Completion provider that plays back a script, then repeats a fallback.
#[derive(Debug)]
pub struct StubProvider {
    script: Mutex<VecDeque<Scripted>>,
    fallback: Scripted,
    calls: AtomicUsize,
    inputs: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn new(script: Vec<Scripted>, fallback: Scripted) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            fallback,
            calls: AtomicUsize::new(0),
            inputs: Mutex::new(Vec::new()),
        })
    }

    pub fn always(reply: Scripted) -> Arc<Self> {
        Self::new(Vec::new(), reply)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, _model: &str, messages: &[ChatMessage]) -> Scripted {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = messages.first() {
            self.inputs.lock().unwrap().push(message.content.clone());
        }
        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| self.fallback.clone())
    }
}

/// Server config with the test key and no delay between attempts.
pub fn test_config() -> ServerConfig {
    ServerConfig::with_defaults(ApiKey::new(TEST_API_KEY).unwrap())
        .with_retry(RetryPolicy::new(RetryPolicy::DEFAULT_MAX_ATTEMPTS, Duration::ZERO))
}

pub fn router_with(config: &ServerConfig, provider: Arc<StubProvider>) -> Router {
    let ctx = bootstrap_with_provider(config, provider);
    create_router(ctx, &config.cors)
}

pub fn test_router(provider: Arc<StubProvider>) -> Router {
    router_with(&test_config(), provider)
}

/// `POST /api/chat` with an optional key.
pub fn chat_request(body: &str, key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/chat")
        .header("content-type", "application/json");
    if let Some(key) = key {
        builder = builder.header("x-api-key", key);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// `GET` with an optional key.
pub fn get_request(uri: &str, key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(key) = key {
        builder = builder.header("x-api-key", key);
    }
    builder.body(Body::empty()).unwrap()
}

/// Send one request and decode the JSON body.
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body)
        .unwrap_or_else(|e| panic!("expected JSON body, got {body:?}: {e}"));
    (status, json)
}

/// Assert `json` is an envelope and return `(status, content)`.
pub fn envelope_parts(json: &Value) -> (&str, &str) {
    let messages = json["data"]["messages"]
        .as_array()
        .expect("envelope has data.messages");
    assert_eq!(messages.len(), 1, "envelope carries one message: {json}");
    assert_eq!(messages[0]["role"], "assistant");
    (
        json["status"].as_str().expect("status is a string"),
        messages[0]["content"].as_str().expect("content is a string"),
    )
}
