//! Command-line arguments.
//!
//! Flags describe the notification to send. Anything left out falls back to
//! a test-friendly default so a bare `--token` is enough to fire one off.

use clap::Parser;

use crate::models::notification::{NotificationRequest, default_notification_id};

/// Sends a single test push notification through Firebase Cloud Messaging.
#[derive(Parser, Debug, Clone)]
#[command(name = "send_test_notification", author, version, about, long_about = None)]
pub struct Cli {
    /// FCM token of the target device (required, also with --from-sample).
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Notification title.
    #[arg(long, default_value = "Teste de Notificação")]
    pub title: String,

    /// Notification body.
    #[arg(long, default_value = "Esta é uma notificação de teste")]
    pub message: String,

    /// Notification ID. Defaults to `test_notif_<YYYYMMDDHHMMSS>`.
    #[arg(long, value_name = "ID")]
    pub notification_id: Option<String>,

    /// User reference.
    #[arg(long, default_value = "test_user_456")]
    pub reference: String,

    /// Deeplink opened when the notification is tapped.
    #[arg(long, default_value = "")]
    pub deeplink: String,

    /// Send the notification described by ./sample_notification.json.
    #[arg(long)]
    pub from_sample: bool,

    /// Path to the Firebase service account key. Falls back to
    /// GOOGLE_APPLICATION_CREDENTIALS.
    #[arg(long, value_name = "FILE")]
    pub credentials: Option<String>,
}

impl Cli {
    pub fn notification_request(&self, token: &str) -> NotificationRequest {
        NotificationRequest {
            token: token.to_string(),
            title: self.title.clone(),
            body: self.message.clone(),
            notification_id: self
                .notification_id
                .clone()
                .filter(|id| !id.is_empty())
                .unwrap_or_else(default_notification_id),
            reference: self.reference.clone(),
            deeplink: self.deeplink.clone(),
        }
    }
}
