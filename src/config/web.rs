use crate::utils::error::Result;
use crate::utils::validation::{validate_optional_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "contact-web")]
#[command(about = "Serves the contact / greetings page")]
pub struct WebConfig {
    /// Greetings endpoint injected into the page
    #[arg(long, env = "API_GATEWAY_URL", default_value = "")]
    pub api_gateway_url: String,

    /// Contact form endpoint injected into the page
    #[arg(long, env = "CONTACT_API_URL", default_value = "")]
    pub contact_api_url: String,

    #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0:8000")]
    pub bind_address: SocketAddr,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for WebConfig {
    fn validate(&self) -> Result<()> {
        validate_optional_url("api_gateway_url", &self.api_gateway_url)?;
        validate_optional_url("contact_api_url", &self.contact_api_url)?;
        Ok(())
    }
}
