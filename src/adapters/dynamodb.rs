use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use base64::Engine;
use serde_json::{Number, Value};
use std::collections::HashMap;

use crate::domain::model::{ContactRecord, GreetingItem};
use crate::domain::ports::{ContactStore, GreetingStore};
use crate::utils::error::{ContactError, Result};

/// DynamoDB-backed contacts and greetings tables.
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: DynamoDbClient,
}

impl DynamoDbStore {
    pub fn new(client: DynamoDbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContactStore for DynamoDbStore {
    async fn put_contact(&self, table_name: &str, record: &ContactRecord) -> Result<()> {
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(contact_item(record)))
            .send()
            .await
            .map(|_| ())
            .map_err(|error| {
                ContactError::store(format!(
                    "failed to put contact into {table_name}: {}",
                    DisplayErrorContext(&error)
                ))
            })
    }
}

#[async_trait]
impl GreetingStore for DynamoDbStore {
    async fn scan_greetings(&self, table_name: &str) -> Result<Vec<GreetingItem>> {
        let mut pages = self
            .client
            .scan()
            .table_name(table_name)
            .into_paginator()
            .items()
            .send();

        let mut items = Vec::new();
        while let Some(item) = pages.next().await {
            let item = item.map_err(|error| {
                ContactError::store(format!(
                    "failed to scan {table_name}: {}",
                    DisplayErrorContext(&error)
                ))
            })?;
            items.push(item_to_json(&item));
        }

        tracing::debug!(count = items.len(), table = table_name, "Scan finished");
        Ok(items)
    }
}

pub fn contact_item(record: &ContactRecord) -> HashMap<String, AttributeValue> {
    HashMap::from([
        ("id".to_string(), AttributeValue::S(record.id.clone())),
        ("name".to_string(), AttributeValue::S(record.name.clone())),
        ("email".to_string(), AttributeValue::S(record.email.clone())),
        ("message".to_string(), AttributeValue::S(record.message.clone())),
        ("timestamp".to_string(), AttributeValue::S(record.timestamp.clone())),
    ])
}

pub fn item_to_json(item: &HashMap<String, AttributeValue>) -> GreetingItem {
    item.iter()
        .map(|(key, value)| (key.clone(), attribute_to_json(value)))
        .collect()
}

/// Plain-JSON view of a DynamoDB attribute.
pub fn attribute_to_json(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::S(text) => Value::String(text.clone()),
        AttributeValue::N(number) => number_to_json(number),
        AttributeValue::Bool(flag) => Value::Bool(*flag),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(values) => Value::Array(values.iter().map(attribute_to_json).collect()),
        AttributeValue::M(map) => Value::Object(item_to_json(map)),
        AttributeValue::Ss(values) => {
            Value::Array(values.iter().cloned().map(Value::String).collect())
        }
        AttributeValue::Ns(values) => {
            Value::Array(values.iter().map(|number| number_to_json(number)).collect())
        }
        AttributeValue::B(blob) => Value::String(encode_blob(blob.as_ref())),
        AttributeValue::Bs(blobs) => Value::Array(
            blobs
                .iter()
                .map(|blob| Value::String(encode_blob(blob.as_ref())))
                .collect(),
        ),
        _ => Value::Null,
    }
}

// DynamoDB 的數字以字串傳輸，無法表示成 JSON 數字時保留原字串
fn number_to_json(number: &str) -> Value {
    if let Ok(integer) = number.parse::<i64>() {
        return Value::from(integer);
    }
    number
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(number.to_string()))
}

fn encode_blob(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}
