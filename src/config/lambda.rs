use crate::utils::error::Result;
use crate::utils::validation::{validate_email_address, validate_required_field, Validate};
use std::env;

pub const CONTACTS_TABLE_VAR: &str = "CONTACTS_TABLE_NAME";
pub const GREETINGS_TABLE_VAR: &str = "DYNAMODB_TABLE";
pub const FROM_EMAIL_VAR: &str = "FROM_EMAIL";
pub const TO_EMAIL_VAR: &str = "TO_EMAIL";
pub const REGION_VAR: &str = "APP_AWS_REGION";

/// Settings shared by the three Lambda functions.
///
/// Every value is optional here: each function only needs some of them, and
/// a missing value is reported by the handler that needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LambdaConfig {
    pub contacts_table: Option<String>,
    pub greetings_table: Option<String>,
    pub from_email: Option<String>,
    pub to_email: Option<String>,
    pub region: Option<String>,
}

impl LambdaConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        // 空字串等同未設定
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            contacts_table: read(CONTACTS_TABLE_VAR),
            greetings_table: read(GREETINGS_TABLE_VAR),
            from_email: read(FROM_EMAIL_VAR),
            to_email: read(TO_EMAIL_VAR),
            region: read(REGION_VAR),
        }
    }

    pub fn mail(&self) -> Result<MailConfig> {
        let from_email = validate_required_field(FROM_EMAIL_VAR, &self.from_email)?.clone();
        let to_email = validate_required_field(TO_EMAIL_VAR, &self.to_email)?.clone();

        let mail = MailConfig {
            from_email,
            to_email,
        };
        mail.validate()?;
        Ok(mail)
    }
}

/// Sender and recipient of contact notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub from_email: String,
    pub to_email: String,
}

impl Validate for MailConfig {
    fn validate(&self) -> Result<()> {
        validate_email_address(FROM_EMAIL_VAR, &self.from_email)?;
        validate_email_address(TO_EMAIL_VAR, &self.to_email)?;

        tracing::debug!("✅ Mail configuration validation passed");
        Ok(())
    }
}
