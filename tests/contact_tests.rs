//! Contact form relay against a mock webhook.

use axum::http::StatusCode;
use landing_site::config::SiteConfig;
use landing_site::http::contact::ContactResponse;
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

mod common;

use common::{app, body_string, post_json};

fn config_for(server: &MockServer) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.contact.webhook_url = Some(format!("{}/hooks/contact", server.uri()).parse().unwrap());
    config.contact.timeout_secs = 2;
    config
}

async fn envelope(response: axum::http::Response<axum::body::Body>) -> ContactResponse {
    serde_json::from_str(&body_string(response).await).unwrap()
}

#[tokio::test]
async fn test_submission_forwarded_verbatim() {
    let server = MockServer::start().await;
    let payload = json!({
        "name": "Ana",
        "email": "ana@example.com",
        "message": "We need a new site",
        "locale": "sl"
    });

    Mock::given(method("POST"))
        .and(path("/hooks/contact"))
        .and(header("content-type", "application/json"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let app = app(config_for(&server));
    let response = post_json(&app, "/api/contact", &payload.to_string()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let envelope = envelope(response).await;
    assert!(envelope.success);
    assert_eq!(envelope.message, "Form submitted successfully");
    assert_eq!(envelope.data, Some(json!({"id": 42})));
}

#[tokio::test]
async fn test_plain_text_webhook_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Accepted"))
        .mount(&server)
        .await;

    let app = app(config_for(&server));
    let response = post_json(&app, "/api/contact", r#"{"name":"Ana"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(envelope(response).await.data, Some(json!("Accepted")));
}

#[tokio::test]
async fn test_webhook_failure_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal error"))
        .mount(&server)
        .await;

    let app = app(config_for(&server));
    let response = post_json(&app, "/api/contact", r#"{"name":"Ana"}"#).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let envelope = envelope(response).await;
    assert!(!envelope.success);
    assert!(envelope.message.starts_with("Error processing form: "));
    assert!(envelope.message.contains("500"));
    assert!(envelope.data.is_none());
}

#[tokio::test]
async fn test_missing_webhook_reported() {
    let app = app(SiteConfig::default());
    let response = post_json(&app, "/api/contact", r#"{"name":"Ana"}"#).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        envelope(response).await.message,
        "Error processing form: contact webhook is not configured"
    );
}

#[tokio::test]
async fn test_malformed_payload_not_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = app(config_for(&server));
    let response = post_json(&app, "/api/contact", "{not json").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(envelope(response)
        .await
        .message
        .starts_with("Error processing form: invalid JSON payload"));
}

#[tokio::test]
async fn test_oversized_payload_rejected() {
    let mut config = SiteConfig::default();
    config.security.max_body_size = 16;
    let app = app(config);

    let response = post_json(&app, "/api/contact", &json!({"message": "x".repeat(64)}).to_string()).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
