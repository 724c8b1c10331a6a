use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use serverless_contact::adapters::load_aws_config;
use serverless_contact::core::notifier::NotifierResponse;
use serverless_contact::utils::logger;
use serverless_contact::{handle_stream_event, LambdaConfig, MailConfig, SesMailer};

async fn handle_request(
    event: LambdaEvent<Value>,
    mail: Option<&MailConfig>,
    mailer: &SesMailer,
) -> Result<NotifierResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "Handling contact stream batch");
    Ok(handle_stream_event(event.payload, mail, mailer).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env();
    // 缺少寄件設定時仍啟動，由 handler 回報 500
    let mail = match config.mail() {
        Ok(mail) => Some(mail),
        Err(error) => {
            tracing::error!(%error, "Mail configuration is incomplete");
            None
        }
    };

    let aws_config = load_aws_config(config.region.as_deref()).await;
    let mailer = SesMailer::new(aws_sdk_sesv2::Client::new(&aws_config));

    let mail = mail.as_ref();
    let mailer = &mailer;
    lambda_runtime::run(service_fn(move |event| handle_request(event, mail, mailer))).await
}
