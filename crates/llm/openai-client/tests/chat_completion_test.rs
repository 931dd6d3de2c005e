//! HTTP-level tests for [`openai_client::OpenAIClient::chat_completion`] against a mockito server.
//!
//! No real OpenAI traffic: the client is pointed at the mock server via `with_base_url`.

use mockito::Matcher;
use openai_client::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, OpenAIClient,
};
use serde_json::json;
use std::time::Duration;

fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1706529600,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 12, "completion_tokens": 7, "total_tokens": 19 }
    })
    .to_string()
}

fn prompt(question: &str) -> Vec<ChatCompletionRequestMessage> {
    vec![
        ChatCompletionRequestSystemMessageArgs::default()
            .content("Answer politely.")
            .build()
            .unwrap()
            .into(),
        ChatCompletionRequestUserMessageArgs::default()
            .content(question)
            .build()
            .unwrap()
            .into(),
    ]
}

/// **Test: Returns the first choice's content unmodified; request carries model and messages in order.**
#[tokio::test]
async fn chat_completion_returns_first_choice() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer sk-test-key-123456")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4o-mini",
            "messages": [
                { "role": "system", "content": "Answer politely." },
                { "role": "user", "content": "오늘 날씨 어때?" }
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("오늘은 맑고 따뜻합니다. "))
        .create_async()
        .await;

    let client = OpenAIClient::with_base_url("sk-test-key-123456".to_string(), server.url());
    let reply = client
        .chat_completion("gpt-4o-mini", prompt("오늘 날씨 어때?"))
        .await
        .unwrap();

    assert_eq!(reply, "오늘은 맑고 따뜻합니다. ");
    mock.assert_async().await;
}

/// **Test: Authentication failure surfaces as an error (no retry on 4xx).**
#[tokio::test]
async fn chat_completion_unauthorized_is_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error": {
                    "message": "Incorrect API key provided",
                    "type": "invalid_request_error",
                    "param": null,
                    "code": "invalid_api_key"
                }
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = OpenAIClient::with_base_url("sk-wrong".to_string(), server.url());
    let err = client
        .chat_completion("gpt-4o-mini", prompt("hi"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Incorrect API key"));
    mock.assert_async().await;
}

/// **Test: A response with no choices is an error, not an empty reply.**
#[tokio::test]
async fn chat_completion_no_choices_is_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "chatcmpl-empty",
                "object": "chat.completion",
                "created": 1706529600,
                "model": "gpt-4o-mini",
                "choices": []
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = OpenAIClient::with_base_url("sk-test-key-123456".to_string(), server.url());
    let err = client
        .chat_completion("gpt-4o-mini", prompt("hi"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "No response from OpenAI");
}

/// **Test: Rate limiting (429) surfaces as an error after a single request, without retrying.**
#[tokio::test]
async fn chat_completion_rate_limited_is_error_without_retry() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error": {
                    "message": "Rate limit reached for gpt-4o-mini",
                    "type": "requests",
                    "param": null,
                    "code": "rate_limit_exceeded"
                }
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = OpenAIClient::with_base_url("sk-test-key-123456".to_string(), server.url());
    let result = tokio::time::timeout(
        Duration::from_secs(5),
        client.chat_completion("gpt-4o-mini", prompt("hi")),
    )
    .await
    .expect("429 should return without backoff");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Rate limit reached"));
    mock.assert_async().await;
}
