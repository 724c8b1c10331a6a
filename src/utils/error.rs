use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Malformed event: {message}")]
    EventError { message: String },

    #[error("Data store error: {message}")]
    StoreError { message: String },

    #[error("Mail delivery error: {message}")]
    MailError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 呼叫端送來的資料有問題
    Client,
    /// 部署環境缺少設定
    Configuration,
    /// 外部服務 (DynamoDB / SES) 失敗
    Upstream,
    Internal,
}

impl ContactError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContactError::EventError { .. } => ErrorCategory::Client,
            ContactError::MissingConfigError { .. }
            | ContactError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ContactError::StoreError { .. } | ContactError::MailError { .. } => {
                ErrorCategory::Upstream
            }
            ContactError::IoError(_) | ContactError::SerializationError(_) => {
                ErrorCategory::Internal
            }
        }
    }

    /// HTTP status a handler should answer with when this error ends the request.
    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::Client => 400,
            _ => 500,
        }
    }

    pub fn is_config(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    pub fn store(message: impl Into<String>) -> Self {
        ContactError::StoreError {
            message: message.into(),
        }
    }

    pub fn mail(message: impl Into<String>) -> Self {
        ContactError::MailError {
            message: message.into(),
        }
    }

    pub fn event(message: impl Into<String>) -> Self {
        ContactError::EventError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;
