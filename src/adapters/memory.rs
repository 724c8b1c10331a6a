//! In-process implementations of the ports, used by tests and local runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::model::{ContactRecord, EmailMessage, GreetingItem};
use crate::domain::ports::{ContactStore, GreetingStore, Mailer};
use crate::utils::error::{ContactError, Result};

fn poisoned() -> ContactError {
    ContactError::store("in-memory store lock poisoned")
}

#[derive(Debug, Default)]
pub struct InMemoryContactStore {
    rows: Mutex<Vec<(String, ContactRecord)>>,
    failure: Option<String>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    /// Rows written so far, as `(table, record)` pairs.
    pub fn rows(&self) -> Vec<(String, ContactRecord)> {
        self.rows
            .lock()
            .map(|rows| rows.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn put_contact(&self, table_name: &str, record: &ContactRecord) -> Result<()> {
        if let Some(message) = &self.failure {
            return Err(ContactError::store(message.clone()));
        }
        let mut rows = self.rows.lock().map_err(|_| poisoned())?;
        // 以 id 為主鍵，重複寫入直接覆蓋
        rows.retain(|(table, row)| !(table == table_name && row.id == record.id));
        rows.push((table_name.to_string(), record.clone()));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryGreetingStore {
    tables: HashMap<String, Vec<GreetingItem>>,
    failure: Option<String>,
}

impl InMemoryGreetingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(mut self, table_name: &str, items: Vec<GreetingItem>) -> Self {
        self.tables.insert(table_name.to_string(), items);
        self
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            tables: HashMap::new(),
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl GreetingStore for InMemoryGreetingStore {
    async fn scan_greetings(&self, table_name: &str) -> Result<Vec<GreetingItem>> {
        if let Some(message) = &self.failure {
            return Err(ContactError::store(message.clone()));
        }
        self.tables
            .get(table_name)
            .cloned()
            .ok_or_else(|| ContactError::store(format!("table '{table_name}' does not exist")))
    }
}

/// Keeps every message it is asked to send.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<EmailMessage>>,
    reject_subject: Option<String>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects messages whose subject contains `fragment`.
    pub fn rejecting(fragment: impl Into<String>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reject_subject: Some(fragment.into()),
        }
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &EmailMessage) -> Result<String> {
        if let Some(fragment) = &self.reject_subject {
            if message.subject.contains(fragment.as_str()) {
                return Err(ContactError::mail(format!(
                    "message '{}' rejected",
                    message.subject
                )));
            }
        }
        let mut sent = self
            .sent
            .lock()
            .map_err(|_| ContactError::mail("mailer lock poisoned"))?;
        sent.push(message.clone());
        Ok(format!("local-{}", sent.len()))
    }
}
