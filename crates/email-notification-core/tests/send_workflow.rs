//! End-to-end send scenarios against stub token and Gmail endpoints.

#![allow(clippy::unwrap_used)]

mod common;

use std::path::Path;

use email_notification_core::{Config, Error, GmailError, OutgoingMessage, send_email};
use email_notification_oauth::{Token, TokenCache};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{ScriptedPrompt, mount_code_exchange, write_credentials};

const SEND_PATH: &str = "/gmail/v1/users/me/messages/send";

fn config_for(dir: &Path, server: &MockServer) -> Config {
    Config::new(write_credentials(dir, server), dir.join("token.json"))
        .with_api_base(format!("{}/gmail/v1/users", server.uri()))
}

fn notification() -> OutgoingMessage {
    OutgoingMessage::new(
        "alerts@example.com",
        "admin@example.com",
        "Disk usage on web-01",
        "/var is 91% full",
    )
}

#[tokio::test]
async fn missing_credentials_is_fatal_and_creates_no_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(dir.path().join("credentials.json"), dir.path().join("token.json"))
        .with_api_base(format!("{}/gmail/v1/users", server.uri()));

    let mut prompt = ScriptedPrompt::answering("code");
    let err = send_email(&config, &notification(), &mut prompt)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Credentials { .. }));
    assert!(err.is_fatal());
    assert_eq!(prompt.calls(), 0);
    assert!(!config.token_path.exists());
}

#[tokio::test]
async fn malformed_credentials_is_fatal() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let credentials_path = dir.path().join("credentials.json");
    std::fs::write(&credentials_path, r#"{"other": {}}"#).unwrap();
    let config = Config::new(&credentials_path, dir.path().join("token.json"))
        .with_api_base(server.uri());

    let mut prompt = ScriptedPrompt::unused();
    let err = send_email(&config, &notification(), &mut prompt)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Credentials { .. }));
    assert!(!config.token_path.exists());
}

#[tokio::test]
async fn first_send_authorizes_and_later_sends_reuse_token() {
    let server = MockServer::start().await;
    mount_code_exchange(&server, "auth-code-123", 1).await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(header("authorization", "Bearer granted-access"))
        .and(body_json(json!({ "raw": notification().encode_raw() })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "18c0ffee",
            "threadId": "18c0ffee",
            "labelIds": ["SENT"],
        })))
        .expect(2)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path(), &server);

    let mut first = ScriptedPrompt::answering("auth-code-123");
    let sent = send_email(&config, &notification(), &mut first)
        .await
        .unwrap();
    assert_eq!(sent.id, "18c0ffee");
    assert_eq!(first.calls(), 1);

    assert!(config.token_path.exists());
    #[cfg(unix)]
    assert_eq!(common::mode(&config.token_path), 0o600);

    let mut second = ScriptedPrompt::unused();
    send_email(&config, &notification(), &mut second)
        .await
        .unwrap();
    assert_eq!(second.calls(), 0);
}

#[tokio::test]
async fn send_failure_is_reported_and_keeps_token_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "code": 500, "message": "Backend Error" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path(), &server);
    TokenCache::new(&config.token_path)
        .save(&Token::new("cached-access", "Bearer").with_refresh_token("cached-refresh"))
        .unwrap();
    let before = std::fs::read(&config.token_path).unwrap();

    let mut prompt = ScriptedPrompt::unused();
    let err = send_email(&config, &notification(), &mut prompt)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Send(GmailError::Api { status: 500, .. })));
    assert!(!err.is_fatal());
    assert_eq!(prompt.calls(), 0);
    assert_eq!(std::fs::read(&config.token_path).unwrap(), before);
}

#[tokio::test]
async fn header_injection_is_rejected_before_authorizing() {
    let server = MockServer::start().await;
    mount_code_exchange(&server, "auth-code", 0).await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path(), &server);

    let message = OutgoingMessage::new("a@example.com", "b@example.com\r\nBcc: c@example.com", "s", "b");
    let mut prompt = ScriptedPrompt::answering("auth-code");
    let err = send_email(&config, &message, &mut prompt).await.unwrap_err();

    assert!(matches!(err, Error::InvalidMessage(_)));
    assert_eq!(prompt.calls(), 0);
    assert!(!config.token_path.exists());
}
