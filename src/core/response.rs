use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::utils::error::ContactError;

pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

/// Proxy-integration response understood by API Gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ApiGatewayResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn json_body(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cors {
    /// 只帶 Allow-Origin
    Origin,
    /// 額外列出允許的 methods / headers
    Full,
}

fn cors_headers(cors: Cors) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    headers.insert(ALLOW_ORIGIN.to_string(), "*".to_string());
    if cors == Cors::Full {
        headers.insert(ALLOW_METHODS.to_string(), ALLOWED_METHODS.to_string());
        headers.insert(ALLOW_HEADERS.to_string(), ALLOWED_HEADERS.to_string());
    }
    headers
}

fn json_response(status_code: u16, cors: Cors, payload: &Value) -> ApiGatewayResponse {
    let mut headers = cors_headers(cors);
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    ApiGatewayResponse {
        status_code,
        headers,
        body: payload.to_string(),
    }
}

pub fn preflight_response() -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: 200,
        headers: cors_headers(Cors::Full),
        body: String::new(),
    }
}

pub fn success_response(payload: impl Serialize) -> ApiGatewayResponse {
    match serde_json::to_value(payload) {
        Ok(value) => json_response(200, Cors::Origin, &value),
        Err(error) => internal_error_response(&ContactError::from(error)),
    }
}

/// 400 for problems with what the caller sent.
pub fn client_error_response(payload: Value) -> ApiGatewayResponse {
    json_response(400, Cors::Full, &payload)
}

pub fn config_error_response() -> ApiGatewayResponse {
    json_response(
        500,
        Cors::Full,
        &json!({ "error": "Server configuration error" }),
    )
}

pub fn internal_error_response(error: &ContactError) -> ApiGatewayResponse {
    json_response(
        500,
        Cors::Origin,
        &json!({ "error": error.to_string() }),
    )
}

/// Maps a handler error onto the response class it belongs to.
pub fn error_response(error: &ContactError) -> ApiGatewayResponse {
    if error.is_config() {
        config_error_response()
    } else if error.status_code() == 400 {
        client_error_response(json!({ "error": error.to_string() }))
    } else {
        internal_error_response(error)
    }
}
