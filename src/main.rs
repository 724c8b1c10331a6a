use clap::Parser;
use serverless_contact::utils::{logger, validation::Validate};
use serverless_contact::web::{self, PageUrls};
use serverless_contact::WebConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = WebConfig::parse();

    // 初始化日誌
    logger::init_web_logger(config.verbose);

    tracing::info!("Starting contact web renderer");
    if config.verbose {
        tracing::debug!("Web config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if config.api_gateway_url.is_empty() || config.contact_api_url.is_empty() {
        tracing::warn!("API URLs are not fully configured; the page will run in local mode");
    }

    web::serve(config.bind_address, PageUrls::from(&config)).await?;
    Ok(())
}
