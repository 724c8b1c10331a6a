use serde_json::{json, Value};
use serverless_contact::adapters::memory::InMemoryGreetingStore;
use serverless_contact::core::response::{ALLOW_METHODS, ALLOW_ORIGIN};
use serverless_contact::domain::model::GreetingItem;
use serverless_contact::handle_greetings_event;

fn items(values: Value) -> Vec<GreetingItem> {
    serde_json::from_value(values).unwrap()
}

fn get_event() -> Value {
    json!({"httpMethod": "GET", "body": null})
}

#[tokio::test]
async fn test_returns_every_stored_item() {
    let store = InMemoryGreetingStore::new()
        .with_items("greetings", items(json!([{"id": "1"}, {"id": "2"}])));

    let response = handle_greetings_event(&get_event(), Some("greetings"), &store).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.header(ALLOW_ORIGIN), Some("*"));
    assert_eq!(
        response.json_body().unwrap(),
        json!([{"id": "1"}, {"id": "2"}])
    );
}

#[tokio::test]
async fn test_empty_table_returns_empty_array() {
    let store = InMemoryGreetingStore::new().with_items("greetings", Vec::new());

    let response = handle_greetings_event(&get_event(), Some("greetings"), &store).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "[]");
}

#[tokio::test]
async fn test_items_are_passed_through_untouched() {
    let stored = json!([
        {"greeting": "Hej från Stockholm!", "lang": "sv", "rank": 1},
        {"greeting": "Hello!", "tags": ["en", "default"]}
    ]);
    let store = InMemoryGreetingStore::new().with_items("greetings", items(stored.clone()));

    let response = handle_greetings_event(&get_event(), Some("greetings"), &store).await;

    assert_eq!(response.json_body().unwrap(), stored);
}

#[tokio::test]
async fn test_store_failure_returns_error_text() {
    let store = InMemoryGreetingStore::failing("AccessDeniedException");

    let response = handle_greetings_event(&get_event(), Some("greetings"), &store).await;

    assert_eq!(response.status_code, 500);
    assert_eq!(response.header(ALLOW_ORIGIN), Some("*"));
    assert_eq!(
        response.json_body().unwrap(),
        json!({"error": "Data store error: AccessDeniedException"})
    );
}

#[tokio::test]
async fn test_missing_table_configuration() {
    let store = InMemoryGreetingStore::new();

    let response = handle_greetings_event(&get_event(), None, &store).await;

    assert_eq!(response.status_code, 500);
    assert_eq!(
        response.json_body().unwrap(),
        json!({"error": "Server configuration error"})
    );
}

#[tokio::test]
async fn test_preflight() {
    let store = InMemoryGreetingStore::new();
    let event = json!({"httpMethod": "OPTIONS"});

    let response = handle_greetings_event(&event, Some("greetings"), &store).await;

    assert_eq!(response.status_code, 200);
    assert!(response.body.is_empty());
    assert_eq!(response.header(ALLOW_METHODS), Some("GET, POST, OPTIONS"));
}
