use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::lambda::MailConfig;
use crate::domain::model::{
    ContactSubmission, EmailMessage, StreamEvent, StreamEventName, StreamRecord,
};
use crate::domain::ports::Mailer;
use crate::utils::error::{ContactError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotifierResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl NotifierResponse {
    fn ok() -> Self {
        Self {
            status_code: 200,
            body: None,
        }
    }

    fn failed(body: Value) -> Self {
        Self {
            status_code: 500,
            body: Some(body.to_string()),
        }
    }
}

/// A record that could not be turned into a sent email.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecordFailure {
    pub record: String,
    pub error: String,
}

/// Sends one notification email per INSERT record in a DynamoDB stream batch.
///
/// Records are handled in order, one send at a time. A failing record, including
/// one that cannot be decoded, does not stop the batch; every failure is listed
/// in the 500 response body.
pub async fn handle_stream_event(
    event: Value,
    mail: Option<&MailConfig>,
    mailer: &dyn Mailer,
) -> NotifierResponse {
    let stream: StreamEvent = match serde_json::from_value(event) {
        Ok(stream) => stream,
        Err(error) => {
            let error = ContactError::event(format!("invalid stream event: {error}"));
            tracing::error!(%error, "Rejected notifier payload");
            return NotifierResponse::failed(json!({ "error": error.to_string() }));
        }
    };

    // 解不開的 record 也要回報，所以和 INSERT 一起保留
    let pending: Vec<(String, Result<StreamRecord>)> = stream
        .records
        .iter()
        .enumerate()
        .map(|(index, raw)| (record_label(index, raw), decode_record(raw)))
        .filter(|(_, decoded)| match decoded {
            Ok(record) => record.event_name == StreamEventName::Insert,
            Err(_) => true,
        })
        .collect();

    tracing::info!(
        records = stream.records.len(),
        pending = pending.len(),
        "Processing contact stream batch"
    );

    if pending.is_empty() {
        return NotifierResponse::ok();
    }

    let has_inserts = pending.iter().any(|(_, decoded)| decoded.is_ok());
    let mail = match mail {
        Some(mail) => Some(mail),
        None if has_inserts => {
            tracing::error!("FROM_EMAIL / TO_EMAIL environment variables not set");
            return NotifierResponse::failed(json!({ "error": "Server configuration error" }));
        }
        None => None,
    };

    let mut failures = Vec::new();
    for (label, decoded) in &pending {
        let outcome = match (decoded, mail) {
            (Ok(record), Some(mail)) => notify(record, mail, mailer)
                .await
                .map_err(|error| error.to_string()),
            (Ok(_), None) => continue,
            (Err(error), _) => Err(error.to_string()),
        };

        match outcome {
            Ok(message_id) => {
                tracing::info!(record = %label, %message_id, "Sent contact notification");
            }
            Err(error) => {
                tracing::error!(record = %label, %error, "Failed to send contact notification");
                failures.push(RecordFailure {
                    record: label.clone(),
                    error,
                });
            }
        }
    }

    if failures.is_empty() {
        NotifierResponse::ok()
    } else {
        NotifierResponse::failed(json!({
            "error": format!(
                "Failed to send {} of {} notifications",
                failures.len(),
                pending.len()
            ),
            "failures": failures,
        }))
    }
}

fn record_label(index: usize, raw: &Value) -> String {
    raw.get("eventID")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{index}"))
}

fn decode_record(raw: &Value) -> Result<StreamRecord> {
    StreamRecord::decode(raw)
        .map_err(|error| ContactError::event(format!("invalid stream record: {error}")))
}

async fn notify(record: &StreamRecord, mail: &MailConfig, mailer: &dyn Mailer) -> Result<String> {
    let contact = contact_from_record(record)?;
    let message = EmailMessage::contact_notification(&mail.from_email, &mail.to_email, &contact);
    mailer.send(&message).await
}

fn contact_from_record(record: &StreamRecord) -> Result<ContactSubmission> {
    let attribute = |name: &str| {
        record
            .new_image_string(name)
            .map(str::to_string)
            .ok_or_else(|| ContactError::event(format!("NewImage is missing string attribute '{name}'")))
    };

    Ok(ContactSubmission {
        name: attribute("name")?,
        email: attribute("email")?,
        message: attribute("message")?,
    })
}
