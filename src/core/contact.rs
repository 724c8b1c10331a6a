use serde_json::{json, Map, Value};

use crate::core::request::{is_preflight, json_body};
use crate::core::response::{
    client_error_response, config_error_response, error_response, internal_error_response,
    preflight_response, success_response, ApiGatewayResponse,
};
use crate::domain::model::{ContactRecord, ContactSubmission};
use crate::domain::ports::ContactStore;

pub const EMPTY_BODY_ERROR: &str = "Request body is empty";
pub const MISSING_FIELDS_ERROR: &str = "Missing required fields: name, email, message";
pub const CONTACT_SAVED_MESSAGE: &str = "Contact saved successfully";

/// Handles one contact-form submission from API Gateway.
///
/// `table_name` is the configured contacts table; `None` or blank answers
/// with a server configuration error after the input has been validated.
pub async fn handle_contact_event(
    event: &Value,
    table_name: Option<&str>,
    store: &dyn ContactStore,
) -> ApiGatewayResponse {
    tracing::debug!(event = %event, "Received contact event");

    if is_preflight(event) {
        return preflight_response();
    }

    let body = match json_body(event) {
        Ok(Some(body)) => body,
        Ok(None) => {
            tracing::info!("Rejected contact submission with empty body");
            return client_error_response(json!({ "error": EMPTY_BODY_ERROR }));
        }
        Err(error) => {
            tracing::info!(%error, "Rejected unreadable contact submission");
            return error_response(&error);
        }
    };

    let Some(fields) = body.as_object() else {
        return client_error_response(json!({
            "error": "Request body must be a JSON object"
        }));
    };

    let submission = read_submission(fields);
    if !submission.is_complete() {
        tracing::info!("Rejected contact submission with missing fields");
        return client_error_response(json!({
            "error": MISSING_FIELDS_ERROR,
            "received": submission,
        }));
    }

    let table_name = match table_name {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            tracing::error!("CONTACTS_TABLE_NAME environment variable not set");
            return config_error_response();
        }
    };

    let record = ContactRecord::new(submission);
    tracing::info!(id = %record.id, table = table_name, "Saving contact record");

    match store.put_contact(table_name, &record).await {
        Ok(()) => success_response(json!({ "message": CONTACT_SAVED_MESSAGE })),
        Err(error) => {
            tracing::error!(%error, id = %record.id, "Failed to save contact record");
            internal_error_response(&error)
        }
    }
}

// 非字串或缺少的欄位一律視為空白
fn read_submission(fields: &Map<String, Value>) -> ContactSubmission {
    let field = |key: &str| {
        fields
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    };

    ContactSubmission {
        name: field("name"),
        email: field("email"),
        message: field("message"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_fields_are_trimmed() {
        let body = json!({"name": "  Alice ", "email": "a@x.com\n", "message": 42});
        let submission = read_submission(body.as_object().unwrap());

        assert_eq!(submission.name, "Alice");
        assert_eq!(submission.email, "a@x.com");
        assert_eq!(submission.message, "");
        assert!(!submission.is_complete());
    }
}
