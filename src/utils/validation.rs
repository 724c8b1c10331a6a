use crate::utils::error::{ContactError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ContactError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ContactError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ContactError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// 頁面上的 URL 可以留空 (前端會切換成本地模式)，有值時才檢查格式
pub fn validate_optional_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Ok(());
    }
    validate_url(field_name, url_str)
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ContactError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ContactError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Accepts a bare address or the `Display Name <address>` form SES takes.
pub fn validate_email_address(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    let malformed = |reason: &str| ContactError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = value.trim();
    let address = match trimmed.strip_suffix('>') {
        Some(rest) => {
            let (_, inner) = rest
                .rsplit_once('<')
                .ok_or_else(|| malformed("Unbalanced '<' in email address"))?;
            inner
        }
        None => trimmed,
    };

    let Some((local, domain)) = address.split_once('@') else {
        return Err(malformed("Email address must contain '@'"));
    };

    if local.is_empty() || domain.is_empty() || address.chars().any(|c| c.is_whitespace() || c == '<') {
        return Err(malformed("Email address is malformed"));
    }

    Ok(())
}
