use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const ANDROID_PRIORITY: &str = "high";
pub const ANDROID_CHANNEL_ID: &str = "dito";
pub const APNS_SOUND: &str = "default";

#[derive(Debug, Clone, Serialize)]
pub struct FcmRequest {
    pub message: FcmMessage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FcmMessage {
    pub token: String,
    pub data: HashMap<String, String>,
    pub android: AndroidConfig,
    pub apns: ApnsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AndroidConfig {
    pub priority: String,
    pub notification: AndroidNotification,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AndroidNotification {
    pub title: String,
    pub body: String,
    pub channel_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApnsConfig {
    pub payload: ApnsPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApnsPayload {
    pub aps: Aps,
}

/// The `aps` dictionary. APNs expects the two flags as the integer `1`,
/// so they are serialized through [`flag`] rather than as JSON booleans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aps {
    pub alert: ApsAlert,
    pub sound: String,
    pub badge: u32,

    #[serde(rename = "content-available", with = "flag")]
    pub content_available: bool,

    #[serde(rename = "mutable-content", with = "flag")]
    pub mutable_content: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApsAlert {
    pub title: String,
    pub body: String,
}

/// Successful `messages:send` response.
#[derive(Debug, Clone, Deserialize)]
pub struct FcmResponse {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FcmErrorResponse {
    pub error: FcmErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FcmErrorBody {
    pub code: u16,
    pub message: String,

    #[serde(default)]
    pub status: String,
}

mod flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(u8::deserialize(deserializer)? != 0)
    }
}
