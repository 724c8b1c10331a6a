pub mod lambda;

#[cfg(feature = "web")]
pub mod web;

pub use lambda::{LambdaConfig, MailConfig};

#[cfg(feature = "web")]
pub use web::WebConfig;
