use std::collections::HashMap;

use chrono::{DateTime, Local, TimeZone};

pub const DEFAULT_CHANNEL: &str = "DITO";
pub const DEFAULT_NOTIFICATION_NAME: &str = "Test Notification";

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// A notification described on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRequest {
    pub token: String,
    pub title: String,
    pub body: String,
    pub notification_id: String,
    pub reference: String,
    pub deeplink: String,
}

/// The normalized data block shared by every input source. Each field maps
/// one-to-one onto a key of the FCM `data` payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationRecord {
    pub channel: String,
    pub notification: String,
    pub reference: String,
    pub log_id: String,
    pub notification_name: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub link: String,
}

impl NotificationRequest {
    pub fn to_record(&self) -> NotificationRecord {
        NotificationRecord {
            channel: DEFAULT_CHANNEL.to_string(),
            notification: self.notification_id.clone(),
            reference: self.reference.clone(),
            log_id: generate_log_id(),
            notification_name: DEFAULT_NOTIFICATION_NAME.to_string(),
            user_id: self.reference.clone(),
            title: self.title.clone(),
            message: self.body.clone(),
            link: self.deeplink.clone(),
        }
    }
}

impl NotificationRecord {
    pub fn into_data(self) -> HashMap<String, String> {
        HashMap::from([
            ("channel".to_string(), self.channel),
            ("notification".to_string(), self.notification),
            ("reference".to_string(), self.reference),
            ("log_id".to_string(), self.log_id),
            ("notification_name".to_string(), self.notification_name),
            ("user_id".to_string(), self.user_id),
            ("title".to_string(), self.title),
            ("message".to_string(), self.message),
            ("link".to_string(), self.link),
        ])
    }
}

pub fn timestamp_at<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn log_id_at<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("log_{}", timestamp_at(at))
}

/// `log_` followed by the current local time as `YYYYMMDDHHMMSS`.
pub fn generate_log_id() -> String {
    log_id_at(&Local::now())
}

pub fn default_notification_id() -> String {
    format!("test_notif_{}", timestamp_at(&Local::now()))
}
