use async_trait::async_trait;
use aws_sdk_sesv2::error::DisplayErrorContext;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use aws_sdk_sesv2::Client as SesClient;

use crate::domain::model::EmailMessage;
use crate::domain::ports::Mailer;
use crate::utils::error::{ContactError, Result};

const CHARSET: &str = "UTF-8";

#[derive(Debug, Clone)]
pub struct SesMailer {
    client: SesClient,
}

impl SesMailer {
    pub fn new(client: SesClient) -> Self {
        Self { client }
    }
}

fn text_content(data: &str) -> Result<Content> {
    Content::builder()
        .data(data)
        .charset(CHARSET)
        .build()
        .map_err(|error| ContactError::mail(format!("failed to build email content: {error}")))
}

#[async_trait]
impl Mailer for SesMailer {
    async fn send(&self, message: &EmailMessage) -> Result<String> {
        let simple = Message::builder()
            .subject(text_content(&message.subject)?)
            .body(Body::builder().text(text_content(&message.text_body)?).build())
            .build();

        let output = self
            .client
            .send_email()
            .from_email_address(&message.from)
            .destination(
                Destination::builder()
                    .set_to_addresses(Some(message.to.clone()))
                    .build(),
            )
            .content(EmailContent::builder().simple(simple).build())
            .send()
            .await
            .map_err(|error| {
                ContactError::mail(format!(
                    "failed to send '{}': {}",
                    message.subject,
                    DisplayErrorContext(&error)
                ))
            })?;

        Ok(output.message_id().unwrap_or_default().to_string())
    }
}
