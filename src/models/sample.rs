use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::notification::{DEFAULT_CHANNEL, NotificationRecord, generate_log_id};

pub const SAMPLE_FILE: &str = "sample_notification.json";

/// A notification previously captured on a device and saved to disk.
///
/// Only `data` feeds the outbound message. The remaining fields describe
/// the original delivery and are kept for logging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SamplePayload {
    #[serde(default)]
    pub timestamp: String,

    #[serde(rename = "messageId", default)]
    pub message_id: String,

    #[serde(rename = "from", default)]
    pub source_address: String,

    /// `null` is accepted and treated like an empty map.
    #[serde(default)]
    pub data: Option<HashMap<String, Value>>,
}

impl SamplePayload {
    /// Missing or non-string entries become empty strings, except `channel`
    /// and `log_id` which fall back to their defaults.
    pub fn to_record(&self) -> NotificationRecord {
        let channel = self.string_field("channel");
        let log_id = self.string_field("log_id");

        NotificationRecord {
            channel: if channel.is_empty() {
                DEFAULT_CHANNEL.to_string()
            } else {
                channel
            },
            notification: self.string_field("notification"),
            reference: self.string_field("reference"),
            log_id: if log_id.is_empty() {
                generate_log_id()
            } else {
                log_id
            },
            notification_name: self.string_field("notification_name"),
            user_id: self.string_field("user_id"),
            title: self.string_field("title"),
            message: self.string_field("message"),
            link: self.string_field("link"),
        }
    }

    fn string_field(&self, key: &str) -> String {
        self.data
            .as_ref()
            .and_then(|data| data.get(key))
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    }
}
