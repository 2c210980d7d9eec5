use std::path::PathBuf;

use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

use crate::error::DispatchError;

pub const DEFAULT_FCM_ENDPOINT: &str = "https://fcm.googleapis.com";

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub google_application_credentials: Option<String>,

    pub fcm_project_id: Option<String>,

    #[serde(default = "default_fcm_endpoint")]
    pub fcm_endpoint: String,

    #[serde(default = "default_fcm_timeout_seconds")]
    pub fcm_timeout_seconds: u64,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_fcm_endpoint() -> String {
    DEFAULT_FCM_ENDPOINT.to_string()
}

fn default_fcm_timeout_seconds() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            google_application_credentials: None,
            fcm_project_id: None,
            fcm_endpoint: default_fcm_endpoint(),
            fcm_timeout_seconds: default_fcm_timeout_seconds(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|e| anyhow!("Invalid environmental variable: {}", e))?;
        Ok(config)
    }

    /// `--credentials` wins when it is non-empty, then
    /// `GOOGLE_APPLICATION_CREDENTIALS`.
    pub fn credentials_path(&self, flag: Option<&str>) -> Result<PathBuf, DispatchError> {
        let from_flag = flag.map(str::trim).filter(|p| !p.is_empty());
        let from_env = self
            .google_application_credentials
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());

        from_flag
            .or(from_env)
            .map(PathBuf::from)
            .ok_or_else(|| {
                DispatchError::Credentials {
                    reason: "GOOGLE_APPLICATION_CREDENTIALS não está definido".to_string(),
                    path: None,
                }
            })
    }
}
