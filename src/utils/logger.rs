use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LAMBDA_LOG_FORMAT_VAR: &str = "AWS_LAMBDA_LOG_FORMAT";
pub const LAMBDA_LOG_LEVEL_VAR: &str = "AWS_LAMBDA_LOG_LEVEL";

pub fn init_web_logger(verbose: bool) {
    let directives = if verbose {
        "serverless_contact=debug,contact_web=debug,info"
    } else {
        "serverless_contact=info,contact_web=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LambdaLogFormat {
    Json,
    Text,
}

/// Log output chosen through the function's logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaLogSettings {
    pub format: LambdaLogFormat,
    pub directives: String,
}

impl LambdaLogSettings {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        // 沒設定時維持 JSON，CloudWatch Logs Insights 才查得到欄位
        let format = match lookup(LAMBDA_LOG_FORMAT_VAR).as_deref().map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("text") => LambdaLogFormat::Text,
            _ => LambdaLogFormat::Json,
        };

        let level = lookup(LAMBDA_LOG_LEVEL_VAR)
            .map(|value| value.trim().to_ascii_lowercase())
            .filter(|value| matches!(value.as_str(), "trace" | "debug" | "info" | "warn" | "error"))
            .unwrap_or_else(|| "info".to_string());

        Self {
            format,
            directives: format!("serverless_contact={level},warn"),
        }
    }
}

/// RUST_LOG still overrides the level picked from the function configuration.
pub fn init_lambda_logger() {
    let settings = LambdaLogSettings::from_lookup(|key| env::var(key).ok());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.directives));

    let registry = tracing_subscriber::registry().with(filter);
    match settings.format {
        LambdaLogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .without_time() // CloudWatch 自帶時間戳
                    .json(),
            )
            .init(),
        LambdaLogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .without_time()
                    .compact(),
            )
            .init(),
    }
}
