use std::path::PathBuf;

use push_sender::{
    config::{Config, DEFAULT_FCM_ENDPOINT, LogFormat},
    error::DispatchError,
};
use tokio_test::{assert_err, assert_ok};

fn config_with_env(credentials: Option<&str>) -> Config {
    Config {
        google_application_credentials: credentials.map(str::to_string),
        ..Config::default()
    }
}

/// Test: Defaults point at the public FCM endpoint
#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.fcm_endpoint, DEFAULT_FCM_ENDPOINT);
    assert_eq!(config.fcm_timeout_seconds, 30);
    assert_eq!(config.log_format, LogFormat::Text);
    assert!(config.fcm_project_id.is_none());
}

/// Test: The --credentials flag takes precedence over the environment
#[test]
fn test_credentials_flag_wins() {
    let config = config_with_env(Some("/env/key.json"));

    let path = assert_ok!(config.credentials_path(Some("/flag/key.json")));

    assert_eq!(path, PathBuf::from("/flag/key.json"));
}

/// Test: An empty flag falls back to GOOGLE_APPLICATION_CREDENTIALS
#[test]
fn test_credentials_fall_back_to_env() {
    let config = config_with_env(Some("/env/key.json"));

    assert_eq!(
        assert_ok!(config.credentials_path(Some(""))),
        PathBuf::from("/env/key.json")
    );
    assert_eq!(
        assert_ok!(config.credentials_path(None)),
        PathBuf::from("/env/key.json")
    );
}

/// Test: Without flag or environment the credentials are missing
#[test]
fn test_credentials_missing() {
    let config = config_with_env(Some("  "));

    let err = assert_err!(config.credentials_path(None));

    assert!(matches!(err, DispatchError::Credentials { path: None, .. }));
    assert!(err.hint().is_some_and(|hint| hint.contains("GOOGLE_APPLICATION_CREDENTIALS")));
}
