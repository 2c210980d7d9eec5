use std::{fs, io::Write, path::Path};

use tracing::{debug, info, warn};

use crate::{
    cli::Cli,
    clients::fcm::MessagingClient,
    error::DispatchError,
    models::{
        fcm::{
            ANDROID_CHANNEL_ID, ANDROID_PRIORITY, APNS_SOUND, AndroidConfig, AndroidNotification,
            ApnsConfig, ApnsPayload, Aps, ApsAlert, FcmMessage,
        },
        notification::{NotificationRecord, NotificationRequest},
        sample::{SAMPLE_FILE, SamplePayload},
        validation::validate_fcm_token,
    },
};

/// Outcome of an accepted send, as reported to the operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub message_id: String,
    pub notification_id: String,
    pub reference: String,

    /// Echoed back only for sample-file sends, where the operator did not
    /// type them.
    pub content: Option<(String, String)>,
}

impl Delivery {
    pub fn report<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "✅ Notificação enviada com sucesso!")?;
        writeln!(out, "   Message ID: {}", self.message_id)?;
        writeln!(out, "   Notification ID: {}", self.notification_id)?;
        writeln!(out, "   Reference: {}", self.reference)?;
        if let Some((title, body)) = &self.content {
            writeln!(out, "   Title: {}", title)?;
            writeln!(out, "   Body: {}", body)?;
        }
        writeln!(out, "   Platform: Android + iOS (com background support)")?;
        Ok(())
    }
}

pub fn build_message(token: &str, record: &NotificationRecord) -> FcmMessage {
    FcmMessage {
        token: token.to_string(),
        data: record.clone().into_data(),
        android: AndroidConfig {
            priority: ANDROID_PRIORITY.to_string(),
            notification: AndroidNotification {
                title: record.title.clone(),
                body: record.message.clone(),
                channel_id: ANDROID_CHANNEL_ID.to_string(),
            },
        },
        apns: ApnsConfig {
            payload: ApnsPayload {
                aps: Aps {
                    alert: ApsAlert {
                        title: record.title.clone(),
                        body: record.message.clone(),
                    },
                    sound: APNS_SOUND.to_string(),
                    badge: 1,
                    content_available: true,
                    mutable_content: true,
                },
            },
        },
    }
}

pub async fn send_from_flags<C: MessagingClient>(
    client: &C,
    request: &NotificationRequest,
) -> Result<Delivery, DispatchError> {
    let token = validate_fcm_token(Some(request.token.as_str()), false)?;

    let record = request.to_record();
    let message_id = send_record(client, token, &record).await?;

    Ok(Delivery {
        message_id,
        notification_id: record.notification,
        reference: record.reference,
        content: None,
    })
}

pub async fn send_from_sample_file<C: MessagingClient>(
    client: &C,
    token: &str,
    path: &Path,
) -> Result<Delivery, DispatchError> {
    let token = validate_fcm_token(Some(token), true)?;

    let raw = fs::read(path).map_err(|source| DispatchError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let payload: SamplePayload = serde_json::from_slice(&raw)?;

    debug!(
        path = %path.display(),
        original_message_id = %payload.message_id,
        from = %payload.source_address,
        timestamp = %payload.timestamp,
        "Loaded sample notification"
    );

    let record = payload.to_record();
    let message_id = send_record(client, token, &record).await?;

    Ok(Delivery {
        message_id,
        notification_id: record.notification,
        reference: record.reference,
        content: Some((record.title, record.message)),
    })
}

/// Validates the token, then sends from either the sample file in the
/// working directory or the flag values.
pub async fn dispatch<C: MessagingClient>(cli: &Cli, client: &C) -> Result<Delivery, DispatchError> {
    let token = validate_fcm_token(cli.token.as_deref(), cli.from_sample)?;

    if cli.from_sample {
        send_from_sample_file(client, token, Path::new(SAMPLE_FILE)).await
    } else {
        send_from_flags(client, &cli.notification_request(token)).await
    }
}

async fn send_record<C: MessagingClient>(
    client: &C,
    token: &str,
    record: &NotificationRecord,
) -> Result<String, DispatchError> {
    let message = build_message(token, record);

    info!(
        notification = %record.notification,
        reference = %record.reference,
        log_id = %record.log_id,
        "Sending notification"
    );

    client.send(&message).await.map_err(|e| {
        warn!(error = %e, log_id = %record.log_id, "Notification send failed");
        DispatchError::Send(e)
    })
}
