use serde_json::Value;

use crate::core::request::is_preflight;
use crate::core::response::{
    config_error_response, internal_error_response, preflight_response, success_response,
    ApiGatewayResponse,
};
use crate::domain::ports::GreetingStore;

/// Returns every greeting in `table_name` as a JSON array.
pub async fn handle_greetings_event(
    event: &Value,
    table_name: Option<&str>,
    store: &dyn GreetingStore,
) -> ApiGatewayResponse {
    if is_preflight(event) {
        return preflight_response();
    }

    let table_name = match table_name {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            tracing::error!("DYNAMODB_TABLE environment variable not set");
            return config_error_response();
        }
    };

    match store.scan_greetings(table_name).await {
        Ok(items) => {
            tracing::info!(count = items.len(), table = table_name, "Loaded greetings");
            success_response(items)
        }
        Err(error) => {
            tracing::error!(%error, table = table_name, "Failed to scan greetings");
            internal_error_response(&error)
        }
    }
}
