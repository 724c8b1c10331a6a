use base64::Engine;
use serde_json::Value;

use crate::utils::error::{ContactError, Result};

/// HTTP method of an API Gateway proxy event (REST v1 or HTTP API v2), upper-cased.
pub fn http_method(event: &Value) -> Option<String> {
    event
        .get("httpMethod")
        .and_then(Value::as_str)
        .or_else(|| {
            event
                .get("requestContext")
                .and_then(|context| context.get("http"))
                .and_then(|http| http.get("method"))
                .and_then(Value::as_str)
        })
        .map(str::to_ascii_uppercase)
}

pub fn is_preflight(event: &Value) -> bool {
    http_method(event).as_deref() == Some("OPTIONS")
}

fn is_proxy_event(object: &serde_json::Map<String, Value>) -> bool {
    object.contains_key("body")
        || object.contains_key("httpMethod")
        || object.contains_key("requestContext")
}

/// Extracts the JSON request body.
///
/// Returns `Ok(None)` when the body is absent or carries no content
/// (`null`, blank text, `{}`, `[]`, `""`). A direct invocation without the
/// proxy envelope is treated as the body itself.
pub fn json_body(event: &Value) -> Result<Option<Value>> {
    let Some(object) = event.as_object() else {
        return Err(ContactError::event("Request payload must be a JSON object"));
    };

    if !is_proxy_event(object) {
        return Ok(non_empty(event.clone()));
    }

    let body = match object.get("body") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(text)) => {
            let text = if is_base64_encoded(event) {
                decode_base64_body(text)?
            } else {
                text.clone()
            };
            if text.trim().is_empty() {
                return Ok(None);
            }
            serde_json::from_str(&text)
                .map_err(|error| ContactError::event(format!("Malformed JSON body: {error}")))?
        }
        Some(other) => other.clone(),
    };

    Ok(non_empty(body))
}

fn is_base64_encoded(event: &Value) -> bool {
    event
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn decode_base64_body(text: &str) -> Result<String> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(text.trim())
        .map_err(|error| ContactError::event(format!("Malformed base64 body: {error}")))?;
    String::from_utf8(bytes)
        .map_err(|error| ContactError::event(format!("Body is not valid UTF-8: {error}")))
}

fn non_empty(value: Value) -> Option<Value> {
    let empty = match &value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(text) => text.is_empty(),
        _ => false,
    };
    (!empty).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_method_from_rest_and_http_api_events() {
        assert_eq!(
            http_method(&json!({"httpMethod": "options"})).as_deref(),
            Some("OPTIONS")
        );
        assert_eq!(
            http_method(&json!({"requestContext": {"http": {"method": "POST"}}})).as_deref(),
            Some("POST")
        );
        assert_eq!(http_method(&json!({"body": "{}"})), None);
    }

    #[test]
    fn string_body_is_parsed() {
        let body = json_body(&json!({"httpMethod": "POST", "body": "{\"name\":\"Alice\"}"}))
            .unwrap()
            .unwrap();
        assert_eq!(body, json!({"name": "Alice"}));
    }

    #[test]
    fn empty_bodies_are_none() {
        for event in [
            json!({"httpMethod": "POST"}),
            json!({"httpMethod": "POST", "body": null}),
            json!({"httpMethod": "POST", "body": "   "}),
            json!({"httpMethod": "POST", "body": "{}"}),
            json!({"httpMethod": "POST", "body": "[]"}),
            json!({}),
        ] {
            assert!(json_body(&event).unwrap().is_none(), "{event}");
        }
    }

    #[test]
    fn base64_body_is_decoded() {
        let encoded = base64::engine::general_purpose::STANDARD.encode("{\"name\":\"Bob\"}");
        let body = json_body(&json!({
            "httpMethod": "POST",
            "isBase64Encoded": true,
            "body": encoded
        }))
        .unwrap()
        .unwrap();
        assert_eq!(body["name"], "Bob");
    }

    #[test]
    fn direct_invocation_payload_is_the_body() {
        let body = json_body(&json!({"name": "Alice", "email": "a@x.com", "message": "hi"}))
            .unwrap()
            .unwrap();
        assert_eq!(body["email"], "a@x.com");
    }

    #[test]
    fn malformed_json_is_a_client_error() {
        let error = json_body(&json!({"httpMethod": "POST", "body": "{not json"})).unwrap_err();
        assert_eq!(error.status_code(), 400);
        assert!(error.to_string().contains("Malformed JSON body"));
    }
}
