use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Greeting rows are produced elsewhere; this crate only passes them through.
pub type GreetingItem = serde_json::Map<String, serde_json::Value>;

/// 表單送進來、已經 trim 過的三個欄位
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }
}

/// One row of the contacts table, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
}

impl ContactRecord {
    pub fn new(submission: ContactSubmission) -> Self {
        Self::with_identity(submission, Uuid::new_v4(), Utc::now())
    }

    pub fn with_identity(submission: ContactSubmission, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            name: submission.name,
            email: submission.email,
            message: submission.message,
            timestamp: created_at.to_rfc3339_opts(SecondsFormat::Micros, false),
        }
    }
}

/// 通知信的內容，SES 只負責寄出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text_body: String,
}

impl EmailMessage {
    pub fn contact_notification(from: &str, to: &str, contact: &ContactSubmission) -> Self {
        Self {
            from: from.to_string(),
            to: vec![to.to_string()],
            subject: format!("Contact from {}", contact.name),
            text_body: format!(
                "Name: {}\nEmail: {}\nMessage: {}",
                contact.name, contact.email, contact.message
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StreamEventName {
    Insert,
    Modify,
    Remove,
}

/// DynamoDB stream payload delivered to the notifier.
///
/// Records stay raw so one malformed record can be reported on its own.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StreamRecord {
    #[serde(rename = "eventID", default)]
    pub event_id: Option<String>,
    #[serde(rename = "eventName")]
    pub event_name: StreamEventName,
    #[serde(default)]
    pub dynamodb: Option<StreamImages>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamImages {
    #[serde(rename = "NewImage", default)]
    pub new_image: Option<HashMap<String, serde_json::Value>>,
}

impl StreamRecord {
    pub fn decode(raw: &serde_json::Value) -> serde_json::Result<Self> {
        Self::deserialize(raw)
    }

    /// Reads a string (`{"S": ...}`) attribute out of the new image.
    pub fn new_image_string(&self, attribute: &str) -> Option<&str> {
        self.dynamodb
            .as_ref()?
            .new_image
            .as_ref()?
            .get(attribute)?
            .get("S")?
            .as_str()
    }
}
