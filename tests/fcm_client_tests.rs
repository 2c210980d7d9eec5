use std::fs;

use anyhow::Result;
use push_sender::{
    clients::fcm::{FcmClient, post_message, send_url},
    config::Config,
    dispatcher::build_message,
    error::DispatchError,
    models::{fcm::FcmRequest, notification::NotificationRecord},
};
use reqwest::Client;
use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

const SEND_PATH: &str = "/v1/projects/demo-project/messages:send";

fn request() -> FcmRequest {
    let record = NotificationRecord {
        channel: "DITO".to_string(),
        title: "Hello".to_string(),
        message: "World".to_string(),
        ..Default::default()
    };

    FcmRequest {
        message: build_message("device-token-123", &record),
    }
}

/// Test: A 200 response yields the message name and the request has the FCM v1 shape
#[tokio::test]
async fn test_post_message_success() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(header("authorization", "Bearer test-access-token"))
        .and(body_partial_json(json!({
            "message": {
                "token": "device-token-123",
                "data": { "channel": "DITO", "title": "Hello" },
                "android": {
                    "priority": "high",
                    "notification": { "title": "Hello", "body": "World", "channel_id": "dito" }
                },
                "apns": {
                    "payload": {
                        "aps": {
                            "alert": { "title": "Hello", "body": "World" },
                            "sound": "default",
                            "badge": 1,
                            "content-available": 1,
                            "mutable-content": 1
                        }
                    }
                }
            }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "name": "projects/demo-project/messages/abc123" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let url = send_url(&server.uri(), "demo-project");
    let message_id = post_message(&Client::new(), &url, "test-access-token", &request()).await?;

    assert_eq!(message_id, "projects/demo-project/messages/abc123");

    Ok(())
}

/// Test: FCM error bodies surface the provider's message and status
#[tokio::test]
async fn test_post_message_fcm_error() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": 404,
                "message": "Requested entity was not found.",
                "status": "NOT_FOUND"
            }
        })))
        .mount(&server)
        .await;

    let url = send_url(&server.uri(), "demo-project");
    let err = post_message(&Client::new(), &url, "test-access-token", &request())
        .await
        .expect_err("Should fail");

    let text = err.to_string();
    assert!(text.contains("Requested entity was not found."), "got: {}", text);
    assert!(text.contains("NOT_FOUND"), "got: {}", text);

    Ok(())
}

/// Test: Non-FCM error bodies are passed through verbatim
#[tokio::test]
async fn test_post_message_raw_error_body() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let url = send_url(&server.uri(), "demo-project");
    let err = post_message(&Client::new(), &url, "test-access-token", &request())
        .await
        .expect_err("Should fail");

    assert!(err.to_string().contains("upstream exploded"));

    Ok(())
}

/// Test: Send URLs tolerate a trailing slash on the endpoint
#[test]
fn test_send_url_trims_trailing_slash() {
    assert_eq!(
        send_url("https://fcm.googleapis.com/", "demo-project"),
        "https://fcm.googleapis.com/v1/projects/demo-project/messages:send"
    );
}

/// Test: A missing credentials file is a credentials error
#[tokio::test]
async fn test_missing_credentials_file() -> Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.path().join("serviceAccountKey.json");

    let result = FcmClient::from_credentials(&missing, &Config::default()).await;

    match result {
        Err(err @ DispatchError::Credentials { .. }) => {
            let hint = err.hint().unwrap_or_default();
            assert!(hint.contains("caminho correto"), "got: {}", hint);
            assert!(!hint.contains("export"), "got: {}", hint);
        }
        Err(other) => panic!("Expected Credentials error, got {:?}", other),
        Ok(_) => panic!("Missing credentials should not build a client"),
    }

    Ok(())
}

/// Test: A malformed credentials file is a credentials error
#[tokio::test]
async fn test_malformed_credentials_file() -> Result<()> {
    let dir = TempDir::new()?;
    let key = dir.path().join("serviceAccountKey.json");
    fs::write(&key, "{ not a service account")?;

    let result = FcmClient::from_credentials(&key, &Config::default()).await;

    match result {
        Err(err @ DispatchError::Credentials { path: Some(_), .. }) => {
            assert_eq!(err.exit_code(), 1)
        }
        Err(other) => panic!("Expected Credentials error, got {:?}", other),
        Ok(_) => panic!("Malformed credentials should not build a client"),
    }

    Ok(())
}
