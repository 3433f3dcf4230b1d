//! Integration tests for `POST /api/chat`.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use boltbridge_axum::ServerConfig;
use boltbridge_core::{CompletionError, CompletionReply, RetryPolicy, StructuredReply};
use serde_json::json;

use common::{
    StubProvider, TEST_API_KEY, chat_request, envelope_parts, router_with, send, test_config,
    test_router,
};

#[tokio::test]
async fn code_reply_is_accepted_on_first_attempt() {
    let provider = StubProvider::always(Ok("def foo(): pass".into()));
    let router = test_router(provider.clone());

    let (status, body) = send(
        router,
        chat_request(r#"{"input": "write a loop"}"#, Some(TEST_API_KEY)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "success",
            "data": {"messages": [{"role": "assistant", "content": "def foo(): pass"}]}
        })
    );
    assert_eq!(provider.calls(), 1);
    assert_eq!(provider.inputs(), vec!["write a loop".to_string()]);
}

#[tokio::test]
async fn structured_reply_content_is_returned() {
    let reply: StructuredReply = serde_json::from_value(json!({
        "choices": [{"message": {"role": "assistant", "content": "const x = 1;"}}]
    }))
    .unwrap();
    let provider = StubProvider::always(Ok(CompletionReply::Structured(reply)));

    let (status, body) = send(
        test_router(provider),
        chat_request(r#"{"input": "js please"}"#, Some(TEST_API_KEY)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope_parts(&body), ("success", "const x = 1;"));
}

#[tokio::test]
async fn prose_every_time_exhausts_with_fixed_message() {
    let provider = StubProvider::always(Ok("just plain prose.".into()));

    let (status, body) = send(
        test_router(provider.clone()),
        chat_request(r#"{"input": "hello"}"#, Some(TEST_API_KEY)),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        envelope_parts(&body),
        (
            "error",
            "Failed to generate a code response after multiple attempts."
        )
    );
    assert_eq!(provider.calls(), 10);
}

#[tokio::test]
async fn upstream_errors_surface_last_error_text() {
    let mut script: Vec<common::Scripted> = (0..9)
        .map(|_| Err(CompletionError::Transport("early failure".into())))
        .collect();
    script.push(Err(CompletionError::UpstreamStatus {
        status: 502,
        body: "no provider available".into(),
    }));
    let provider = StubProvider::new(script, Ok("unused;".into()));

    let (status, body) = send(
        test_router(provider.clone()),
        chat_request(r#"{"input": "x"}"#, Some(TEST_API_KEY)),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let (flag, content) = envelope_parts(&body);
    assert_eq!(flag, "error");
    assert!(content.starts_with("Error: "), "got: {content}");
    assert!(content.contains("no provider available"), "got: {content}");
    assert_eq!(provider.calls(), 10);
}

#[tokio::test]
async fn failure_markers_are_retried() {
    let provider = StubProvider::new(
        vec![
            Ok("Model not found".into()),
            Ok("Error: too long input;".into()),
        ],
        Ok("import sys".into()),
    );

    let (status, body) = send(
        test_router(provider.clone()),
        chat_request(r#"{"input": "x"}"#, Some(TEST_API_KEY)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope_parts(&body), ("success", "import sys"));
    assert_eq!(provider.calls(), 3);
}

#[tokio::test]
async fn empty_input_is_rejected_without_calling_upstream() {
    let provider = StubProvider::always(Ok("x;".into()));

    let (status, body) = send(
        test_router(provider.clone()),
        chat_request(r#"{"input": ""}"#, Some(TEST_API_KEY)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "status": "error",
            "data": {"messages": [{"role": "assistant", "content": "No input provided"}]}
        })
    );
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn unparseable_body_is_invalid_payload() {
    for raw in ["", "{not json", "{}", "[1]"] {
        let provider = StubProvider::always(Ok("x;".into()));

        let (status, body) = send(
            test_router(provider.clone()),
            chat_request(raw, Some(TEST_API_KEY)),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body {raw:?}");
        assert_eq!(envelope_parts(&body), ("error", "Invalid request payload"));
        assert_eq!(provider.calls(), 0);
    }
}

#[tokio::test]
async fn configured_attempt_budget_is_respected() {
    let config: ServerConfig =
        test_config().with_retry(RetryPolicy::new(3, Duration::ZERO));
    let provider = StubProvider::always(Ok("no code here".into()));

    let (status, _) = send(
        router_with(&config, provider.clone()),
        chat_request(r#"{"input": "x"}"#, Some(TEST_API_KEY)),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(provider.calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn default_policy_waits_three_seconds_between_attempts() {
    let config = test_config().with_retry(RetryPolicy::default());
    let provider = StubProvider::new(vec![Ok("prose".into()), Ok("prose".into())], Ok("x;".into()));
    let start = tokio::time::Instant::now();

    let (status, _) = send(
        router_with(&config, provider.clone()),
        chat_request(r#"{"input": "x"}"#, Some(TEST_API_KEY)),
    )
    .await;

    let waited = start.elapsed();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(provider.calls(), 3);
    assert!(
        waited >= Duration::from_secs(6) && waited < Duration::from_secs(7),
        "waited {waited:?}"
    );
}

#[tokio::test]
async fn multi_megabyte_input_is_forwarded() {
    let input = "a".repeat(3 * 1024 * 1024);
    let provider = StubProvider::always(Ok("def foo(): pass".into()));

    let (status, body) = send(
        test_router(provider.clone()),
        chat_request(&format!(r#"{{"input": "{input}"}}"#), Some(TEST_API_KEY)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope_parts(&body), ("success", "def foo(): pass"));
    assert_eq!(provider.calls(), 1);
    assert_eq!(provider.inputs()[0].len(), input.len());
}

#[tokio::test]
async fn get_on_chat_is_method_not_allowed_envelope() {
    let provider = StubProvider::always(Ok("x;".into()));

    let (status, body) = send(
        test_router(provider.clone()),
        common::get_request("/api/chat", Some(TEST_API_KEY)),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(envelope_parts(&body), ("error", "Method not allowed"));
    assert_eq!(provider.calls(), 0);
}
