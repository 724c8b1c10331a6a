use crate::domain::model::{ContactRecord, EmailMessage, GreetingItem};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Write side of the contacts table.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn put_contact(&self, table_name: &str, record: &ContactRecord) -> Result<()>;
}

/// Read side of the greetings table.
#[async_trait]
pub trait GreetingStore: Send + Sync {
    /// Returns every item in the table.
    async fn scan_greetings(&self, table_name: &str) -> Result<Vec<GreetingItem>>;
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends one message; returns the provider's message id.
    async fn send(&self, message: &EmailMessage) -> Result<String>;
}
