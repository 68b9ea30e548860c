//! Integration tests for `WebhookClient::post` against a local `wiremock` server.

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use foodpark_core::{SlackSettings, TargetDate, VendorListing, VendorRecord};
use foodpark_notify::{compose_message, NotifyError, WebhookClient, WebhookMessage};

fn message() -> WebhookMessage {
    let listing = VendorListing {
        location: "Cambridge Science Park".to_string(),
        vendors: vec![VendorRecord::new("Pizza Van*", None)],
        any_walk_up_only: true,
    };
    let slack = SlackSettings {
        username: "foodPark".to_string(),
        channel: "#lunch".to_string(),
        icon_url: "https://foodparkcam.com/favicon.ico".to_string(),
        webhook_url: String::new(),
    };
    let target = TargetDate::new(NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
    compose_message(&listing, &target, &slack)
}

fn test_client() -> WebhookClient {
    WebhookClient::new(5, "foodpark-test/0.1").expect("failed to build test WebhookClient")
}

#[tokio::test]
async fn posts_message_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/T000/B000/XXX"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "username": "foodPark",
            "channel": "#lunch",
            "icon_url": "https://foodparkcam.com/favicon.ico"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client()
        .post(&format!("{}/services/T000/B000/XXX", server.uri()), &message())
        .await;
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

#[tokio::test]
async fn rejected_message_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid_blocks"))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client().post(&server.uri(), &message()).await;
    match result {
        Err(NotifyError::UnexpectedStatus { status, body }) => {
            assert_eq!(status, 400);
            assert_eq!(body, "invalid_blocks");
        }
        other => panic!("expected UnexpectedStatus, got: {other:?}"),
    }
}
