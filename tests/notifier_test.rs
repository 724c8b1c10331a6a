use serde_json::{json, Value};
use serverless_contact::adapters::memory::RecordingMailer;
use serverless_contact::{handle_stream_event, MailConfig};

fn mail_config() -> MailConfig {
    MailConfig {
        from_email: "noreply@example.com".to_string(),
        to_email: "owner@example.com".to_string(),
    }
}

fn stream_record(event_id: &str, event_name: &str, name: &str, email: &str, message: &str) -> Value {
    json!({
        "eventID": event_id,
        "eventName": event_name,
        "eventSource": "aws:dynamodb",
        "dynamodb": {
            "Keys": {"id": {"S": format!("id-{event_id}")}},
            "NewImage": {
                "id": {"S": format!("id-{event_id}")},
                "name": {"S": name},
                "email": {"S": email},
                "message": {"S": message},
                "timestamp": {"S": "2026-01-01T00:00:00.000000+00:00"}
            },
            "StreamViewType": "NEW_IMAGE"
        }
    })
}

#[tokio::test]
async fn test_single_insert_sends_one_email() {
    let mailer = RecordingMailer::new();
    let event = json!({"Records": [stream_record("1", "INSERT", "Bob", "b@x.com", "hey")]});

    let response = handle_stream_event(event, Some(&mail_config()), &mailer).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, None);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    let email = &sent[0];
    assert_eq!(email.from, "noreply@example.com");
    assert_eq!(email.to, vec!["owner@example.com".to_string()]);
    assert_eq!(email.subject, "Contact from Bob");
    assert!(email.text_body.contains("Bob"));
    assert!(email.text_body.contains("b@x.com"));
    assert!(email.text_body.contains("hey"));
}

#[tokio::test]
async fn test_only_insert_events_send_email() {
    let mailer = RecordingMailer::new();
    let event = json!({"Records": [
        stream_record("1", "MODIFY", "Ann", "a@x.com", "changed"),
        stream_record("2", "INSERT", "Bob", "b@x.com", "hey"),
        stream_record("3", "REMOVE", "Cid", "c@x.com", "gone"),
    ]});

    let response = handle_stream_event(event, Some(&mail_config()), &mailer).await;

    assert_eq!(response.status_code, 200);
    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Contact from Bob");
}

#[tokio::test]
async fn test_emails_are_sent_in_record_order() {
    let mailer = RecordingMailer::new();
    let event = json!({"Records": [
        stream_record("1", "INSERT", "Ann", "a@x.com", "first"),
        stream_record("2", "INSERT", "Bob", "b@x.com", "second"),
        stream_record("3", "INSERT", "Ann", "a@x.com", "first"),
    ]});

    let response = handle_stream_event(event, Some(&mail_config()), &mailer).await;

    assert_eq!(response.status_code, 200);
    let subjects: Vec<String> = mailer.sent().into_iter().map(|mail| mail.subject).collect();
    // 不做去重
    assert_eq!(
        subjects,
        vec!["Contact from Ann", "Contact from Bob", "Contact from Ann"]
    );
}

#[tokio::test]
async fn test_failure_does_not_stop_later_records() {
    let mailer = RecordingMailer::rejecting("Bob");
    let event = json!({"Records": [
        stream_record("1", "INSERT", "Ann", "a@x.com", "first"),
        stream_record("2", "INSERT", "Bob", "b@x.com", "second"),
        stream_record("3", "INSERT", "Cid", "c@x.com", "third"),
    ]});

    let response = handle_stream_event(event, Some(&mail_config()), &mailer).await;

    assert_eq!(response.status_code, 500);
    let sent: Vec<String> = mailer.sent().into_iter().map(|mail| mail.subject).collect();
    assert_eq!(sent, vec!["Contact from Ann", "Contact from Cid"]);

    let body: Value = serde_json::from_str(response.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["error"], "Failed to send 1 of 3 notifications");
    assert_eq!(body["failures"][0]["record"], "2");
    assert!(body["failures"][0]["error"]
        .as_str()
        .unwrap()
        .contains("Contact from Bob"));
}

#[tokio::test]
async fn test_record_without_contact_fields_is_reported() {
    let mailer = RecordingMailer::new();
    let event = json!({"Records": [
        {"eventName": "INSERT", "dynamodb": {"NewImage": {"name": {"S": "Bob"}}}},
        stream_record("2", "INSERT", "Ann", "a@x.com", "hi"),
    ]});

    let response = handle_stream_event(event, Some(&mail_config()), &mailer).await;

    assert_eq!(response.status_code, 500);
    assert_eq!(mailer.sent().len(), 1);
    let body: Value = serde_json::from_str(response.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["failures"][0]["record"], "#0");
}

#[tokio::test]
async fn test_missing_mail_configuration() {
    let mailer = RecordingMailer::new();
    let event = json!({"Records": [stream_record("1", "INSERT", "Bob", "b@x.com", "hey")]});

    let response = handle_stream_event(event, None, &mailer).await;

    assert_eq!(response.status_code, 500);
    assert!(response
        .body
        .as_deref()
        .unwrap()
        .contains("Server configuration error"));
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_batch_without_inserts_needs_no_mail_configuration() {
    let mailer = RecordingMailer::new();
    let event = json!({"Records": [stream_record("1", "REMOVE", "Bob", "b@x.com", "hey")]});

    let response = handle_stream_event(event, None, &mailer).await;

    assert_eq!(response.status_code, 200);
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_undecodable_records_do_not_block_the_batch() {
    let mailer = RecordingMailer::new();
    let event = json!({"Records": [
        stream_record("1", "INSERT", "Bob", "b@x.com", "hey"),
        {"eventID": "2", "eventName": "UPSERT"},
        {"eventID": "3", "eventName": "INSERT", "dynamodb": null},
        stream_record("4", "INSERT", "Cid", "c@x.com", "yo"),
    ]});

    let response = handle_stream_event(event, Some(&mail_config()), &mailer).await;

    assert_eq!(response.status_code, 500);
    let sent: Vec<String> = mailer.sent().into_iter().map(|mail| mail.subject).collect();
    assert_eq!(sent, vec!["Contact from Bob", "Contact from Cid"]);

    let body: Value = serde_json::from_str(response.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["error"], "Failed to send 2 of 4 notifications");
    assert_eq!(body["failures"][0]["record"], "2");
    assert!(body["failures"][0]["error"]
        .as_str()
        .unwrap()
        .starts_with("Malformed event: invalid stream record"));
    assert_eq!(body["failures"][1]["record"], "3");
    assert!(body["failures"][1]["error"]
        .as_str()
        .unwrap()
        .contains("'name'"));
}

#[tokio::test]
async fn test_non_stream_payload_is_rejected() {
    let mailer = RecordingMailer::new();

    let response =
        handle_stream_event(json!({"Records": "nope"}), Some(&mail_config()), &mailer).await;

    assert_eq!(response.status_code, 500);
    assert!(response
        .body
        .as_deref()
        .unwrap()
        .contains("invalid stream event"));
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_response_serializes_like_the_lambda_contract() {
    let mailer = RecordingMailer::new();

    let response = handle_stream_event(json!({"Records": []}), Some(&mail_config()), &mailer).await;

    assert_eq!(serde_json::to_value(&response).unwrap(), json!({"statusCode": 200}));
}
