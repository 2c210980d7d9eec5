use std::{future::Future, path::Path, sync::Arc, time::Duration};

use anyhow::{Error, Result, anyhow};
use gcp_auth::{CustomServiceAccount, TokenProvider};
use reqwest::Client;
use tracing::{debug, info};

use crate::{
    config::Config,
    error::DispatchError,
    models::fcm::{FcmErrorResponse, FcmMessage, FcmRequest, FcmResponse},
};

pub const FCM_SCOPES: &[&str] = &["https://www.googleapis.com/auth/firebase.messaging"];

/// Anything able to deliver one [`FcmMessage`] and report the provider's
/// message identifier.
pub trait MessagingClient {
    fn send(&self, message: &FcmMessage) -> impl Future<Output = Result<String, Error>> + Send;
}

pub struct FcmClient {
    http_client: Client,
    send_url: String,
    auth: Arc<dyn TokenProvider>,
}

impl FcmClient {
    pub async fn from_credentials(
        credentials_path: &Path,
        config: &Config,
    ) -> Result<Self, DispatchError> {
        let _ = rustls::crypto::ring::default_provider().install_default();

        debug!(path = %credentials_path.display(), "Loading service account credentials");

        let account = CustomServiceAccount::from_file(credentials_path).map_err(|e| {
            DispatchError::Credentials {
                reason: format!("{}: {}", credentials_path.display(), e),
                path: Some(credentials_path.to_path_buf()),
            }
        })?;
        let auth: Arc<dyn TokenProvider> = Arc::new(account);

        let project_id = match config.fcm_project_id.as_deref().filter(|p| !p.is_empty()) {
            Some(project_id) => project_id.to_string(),
            None => auth
                .project_id()
                .await
                .map_err(|e| DispatchError::ClientInit(format!("project_id ausente: {}", e)))?
                .to_string(),
        };

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.fcm_timeout_seconds))
            .build()
            .map_err(|e| DispatchError::ClientInit(format!("Failed to create HTTP client: {}", e)))?;

        info!(project_id = %project_id, "FCM client initialized");

        Ok(Self {
            http_client,
            send_url: send_url(&config.fcm_endpoint, &project_id),
            auth,
        })
    }
}

impl MessagingClient for FcmClient {
    async fn send(&self, message: &FcmMessage) -> Result<String, Error> {
        let token = self.auth.token(FCM_SCOPES).await?;

        let request = FcmRequest {
            message: message.clone(),
        };

        post_message(&self.http_client, &self.send_url, token.as_str(), &request).await
    }
}

pub fn send_url(endpoint: &str, project_id: &str) -> String {
    format!(
        "{}/v1/projects/{}/messages:send",
        endpoint.trim_end_matches('/'),
        project_id
    )
}

/// One `messages:send` exchange. Returns the `name` FCM assigns to the
/// accepted message.
pub async fn post_message(
    http_client: &Client,
    url: &str,
    bearer_token: &str,
    request: &FcmRequest,
) -> Result<String, Error> {
    debug!(url, "Sending FCM push notification");

    let response = http_client
        .post(url)
        .bearer_auth(bearer_token)
        .json(request)
        .send()
        .await?;

    let status = response.status();

    if status.is_success() {
        let body: FcmResponse = response.json().await?;
        info!(message_id = %body.name, "FCM push notification sent successfully");
        Ok(body.name)
    } else {
        let error_text = response.text().await?;
        let detail = match serde_json::from_str::<FcmErrorResponse>(&error_text) {
            Ok(parsed) => format!("{} ({})", parsed.error.message, parsed.error.status),
            Err(_) => error_text,
        };
        Err(anyhow!("FCM request failed with status {}: {}", status, detail))
    }
}
