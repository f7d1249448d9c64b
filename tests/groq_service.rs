use std::sync::Arc;

use httpmock::Method::POST;
use httpmock::MockServer;
use serde_json::json;

use pawnin::error::CompletionError;
use pawnin::models::prompt::Turn;
use pawnin::services::groq_service::GroqService;
use pawnin::services::{ChatCompletion, ChatService, TROUBLE_REPLY};

fn transcript() -> Vec<Turn> {
    vec![Turn::system("persona"), Turn::user("hi")]
}

fn service_for(server: &MockServer) -> GroqService {
    GroqService::new(server.url("/openai/v1/chat/completions"), "test-key".to_string())
}

#[actix_web::test]
async fn sends_model_messages_and_temperature() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/openai/v1/chat/completions")
                .header("authorization", "Bearer test-key")
                .json_body(json!({
                    "model": "llama-3.1-8b-instant",
                    "messages": [
                        {"role": "system", "content": "persona"},
                        {"role": "user", "content": "hi"}
                    ],
                    "temperature": 0.7
                }));
            then.status(200).json_body(json!({
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "model": "llama-3.1-8b-instant",
                "choices": [
                    {"index": 0, "message": {"role": "assistant", "content": " Hello there! "}, "finish_reason": "stop"},
                    {"index": 1, "message": {"role": "assistant", "content": "ignored"}, "finish_reason": "stop"}
                ]
            }));
        })
        .await;

    let reply = service_for(&server).complete(&transcript()).await.unwrap();

    assert_eq!(reply, " Hello there! ");
    mock.assert_calls_async(1).await;
}

#[actix_web::test]
async fn empty_choices_are_reported_as_no_candidates() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200).json_body(json!({ "choices": [] }));
        })
        .await;

    let err = service_for(&server).complete(&transcript()).await.unwrap_err();
    assert!(matches!(err, CompletionError::NoCandidates));
}

#[actix_web::test]
async fn null_or_zero_length_content_is_reported_as_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/null/chat/completions");
            then.status(200).json_body(json!({
                "choices": [{"index": 0, "message": {"role": "assistant", "content": null}}]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/zero/chat/completions");
            then.status(200).json_body(json!({
                "choices": [{"index": 0, "message": {"role": "assistant", "content": ""}}]
            }));
        })
        .await;

    for path in ["/null/chat/completions", "/zero/chat/completions"] {
        let service = GroqService::new(server.url(path), "test-key".to_string());
        let err = service.complete(&transcript()).await.unwrap_err();
        assert!(matches!(err, CompletionError::EmptyContent), "{path}: {err}");
    }
}

#[actix_web::test]
async fn whitespace_content_is_passed_through_untrimmed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200).json_body(json!({
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "   "}}]
            }));
        })
        .await;

    let reply = service_for(&server).complete(&transcript()).await.unwrap();
    assert_eq!(reply, "   ");
}

#[actix_web::test]
async fn whitespace_reply_is_trimmed_and_recorded_by_chat_service() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200).json_body(json!({
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "   "}}]
            }));
        })
        .await;
    let chat_service = ChatService::new(Arc::new(service_for(&server)), "persona");

    let reply = chat_service.reply("hi").await;

    assert_eq!(reply, "");
    assert_eq!(
        chat_service.conversation().snapshot(),
        vec![Turn::system("persona"), Turn::user("hi"), Turn::assistant("")]
    );
}

#[actix_web::test]
async fn error_status_carries_status_and_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(401).body("invalid api key");
        })
        .await;

    let err = service_for(&server).complete(&transcript()).await.unwrap_err();
    match err {
        CompletionError::Status { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[actix_web::test]
async fn unreachable_provider_is_a_transport_error() {
    let service = GroqService::new(
        "http://127.0.0.1:1/openai/v1/chat/completions".to_string(),
        "test-key".to_string(),
    );

    let err = service.complete(&transcript()).await.unwrap_err();
    assert!(matches!(err, CompletionError::Transport(_)));
}

#[actix_web::test]
async fn non_json_success_body_is_a_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200).body("<html>gateway</html>");
        })
        .await;

    let err = service_for(&server).complete(&transcript()).await.unwrap_err();
    assert!(matches!(err, CompletionError::Transport(_)));
}

#[actix_web::test]
async fn unreachable_provider_yields_trouble_reply_and_keeps_user_turn() {
    let groq_service = GroqService::new(
        "http://127.0.0.1:1/openai/v1/chat/completions".to_string(),
        "test-key".to_string(),
    );
    let chat_service = ChatService::new(Arc::new(groq_service), "persona");

    let reply = chat_service.reply("hi").await;

    assert_eq!(reply, TROUBLE_REPLY);
    assert_eq!(
        chat_service.conversation().snapshot(),
        vec![Turn::system("persona"), Turn::user("hi")]
    );
}
