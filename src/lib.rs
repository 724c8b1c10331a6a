pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "web")]
pub mod web;

pub use config::{LambdaConfig, MailConfig};

#[cfg(feature = "web")]
pub use config::WebConfig;

#[cfg(feature = "lambda")]
pub use adapters::{dynamodb::DynamoDbStore, ses::SesMailer};

pub use crate::core::{
    contact::handle_contact_event, greetings::handle_greetings_event,
    notifier::handle_stream_event, response::ApiGatewayResponse,
};
pub use utils::error::{ContactError, Result};
