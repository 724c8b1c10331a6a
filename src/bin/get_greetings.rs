use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use serverless_contact::adapters::load_aws_config;
use serverless_contact::utils::logger;
use serverless_contact::{handle_greetings_event, ApiGatewayResponse, DynamoDbStore, LambdaConfig};

async fn handle_request(
    event: LambdaEvent<Value>,
    table_name: Option<&str>,
    store: &DynamoDbStore,
) -> Result<ApiGatewayResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "Handling greetings request");
    Ok(handle_greetings_event(&event.payload, table_name, store).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env();
    let aws_config = load_aws_config(config.region.as_deref()).await;
    let store = DynamoDbStore::new(aws_sdk_dynamodb::Client::new(&aws_config));

    let table_name = config.greetings_table.as_deref();
    let store = &store;
    lambda_runtime::run(service_fn(move |event| {
        handle_request(event, table_name, store)
    }))
    .await
}
