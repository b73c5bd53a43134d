//! End-to-end tests for the registration email function over HTTP.
//!
//! The SMTP relay is replaced by a recording transport; everything else runs
//! through the real router and middleware.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use common::{app_with, assert_cors_headers, body_bytes, body_json, empty_request, post_json, NOTIFY_PATH};
use registration_notifier::email::Audience;
use registration_notifier::test_utils::{sample_request_json, RecordingTransport};
use registration_notifier::RegistrationNotificationRequest;

#[tokio::test]
async fn preflight_returns_empty_success_without_opening_a_session() {
    let transport = Arc::new(RecordingTransport::new());
    let app = app_with(transport.clone(), None);

    let response = app
        .oneshot(empty_request(Method::OPTIONS, NOTIFY_PATH))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors_headers(&response);
    assert!(body_bytes(response).await.is_empty());
    assert_eq!(transport.sessions_opened(), 0);
    assert_eq!(transport.send_attempts(), 0);
}

#[tokio::test]
async fn blasters_registration_sends_both_emails() {
    let transport = Arc::new(RecordingTransport::new());
    let app = app_with(transport.clone(), None);

    let response = app
        .oneshot(post_json(NOTIFY_PATH, sample_request_json().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors_headers(&response);
    assert_eq!(response.headers()["content-type"], "application/json");
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(
        body_json(response).await,
        json!({"success": true, "message": "Registration emails sent successfully"})
    );

    let sent = transport.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].audience, Audience::Registrant);
    assert_eq!(sent[0].to, "ravi@x.com");
    assert_eq!(sent[0].from, "Western Ghats X <events@westernghatsx.in>");
    assert!(sent[0].body.contains(r#"<div class="status success">"#));
    assert!(sent[0].body.contains("Amount: ₹500"));
    assert_eq!(sent[1].audience, Audience::Admin);
    assert_eq!(sent[1].to, "events@westernghatsx.in");
    assert_eq!(sent[1].subject, "New Team Registration: Blasters");
    assert_eq!(transport.sessions_closed(), 1);
}

#[tokio::test]
async fn malformed_json_yields_500_with_parser_message() {
    let transport = Arc::new(RecordingTransport::new());
    let app = app_with(transport.clone(), None);
    let body = r#"{"teamData": "#;
    let expected = serde_json::from_str::<RegistrationNotificationRequest>(body)
        .unwrap_err()
        .to_string();

    let response = app.oneshot(post_json(NOTIFY_PATH, body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors_headers(&response);
    assert_eq!(
        body_json(response).await,
        json!({"success": false, "error": expected})
    );
    assert_eq!(transport.sessions_opened(), 0);
}

#[tokio::test]
async fn missing_required_field_yields_500() {
    let transport = Arc::new(RecordingTransport::new());
    let app = app_with(transport.clone(), None);
    let mut payload = sample_request_json();
    payload["teamData"]
        .as_object_mut()
        .unwrap()
        .remove("captainEmail");

    let response = app
        .oneshot(post_json(NOTIFY_PATH, payload.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("captainEmail"));
    assert_eq!(transport.send_attempts(), 0);
}

#[tokio::test]
async fn registrant_send_failure_stops_before_admin_send() {
    let transport = Arc::new(RecordingTransport::failing_on_send(
        1,
        "421 service not available",
    ));
    let app = app_with(transport.clone(), None);

    let response = app
        .oneshot(post_json(NOTIFY_PATH, sample_request_json().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({"success": false, "error": "421 service not available"})
    );
    assert_eq!(transport.send_attempts(), 1);
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn admin_send_failure_is_reported_as_single_failure() {
    let transport = Arc::new(RecordingTransport::failing_on_send(2, "connection reset"));
    let app = app_with(transport.clone(), None);

    let response = app
        .oneshot(post_json(NOTIFY_PATH, sample_request_json().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({"success": false, "error": "connection reset"})
    );
    // The registrant copy went out; nothing in the envelope says so
    assert_eq!(transport.sent().len(), 1);
}

#[tokio::test]
async fn smtp_auth_rejection_yields_500() {
    let transport = Arc::new(RecordingTransport::failing_on_open(
        "535 5.7.8 authentication failed",
    ));
    let app = app_with(transport.clone(), None);

    let response = app
        .oneshot(post_json(NOTIFY_PATH, sample_request_json().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["error"],
        "535 5.7.8 authentication failed"
    );
}

#[tokio::test]
async fn non_options_method_without_body_fails_as_parse_error() {
    let transport = Arc::new(RecordingTransport::new());
    let app = app_with(transport.clone(), None);

    let response = app
        .oneshot(empty_request(Method::GET, NOTIFY_PATH))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors_headers(&response);
    assert_eq!(body_json(response).await["success"], false);
}

#[tokio::test]
async fn repeated_invocation_resends_both_emails() {
    let transport = Arc::new(RecordingTransport::new());

    for _ in 0..2 {
        let response = app_with(transport.clone(), None)
            .oneshot(post_json(NOTIFY_PATH, sample_request_json().to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(transport.sent().len(), 4);
    assert_eq!(transport.sessions_opened(), 2);
}

#[tokio::test]
async fn oversized_body_still_answers_with_the_json_envelope() {
    let transport = Arc::new(RecordingTransport::new());
    let app = app_with(transport.clone(), None);
    let mut payload = sample_request_json();
    payload["teamData"]["teamName"] = json!("x".repeat(3 * 1024 * 1024));

    let response = app
        .oneshot(post_json(NOTIFY_PATH, payload.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors_headers(&response);
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_eq!(
        body_json(response).await,
        json!({"success": true, "message": "Registration emails sent successfully"})
    );
    assert_eq!(transport.sent().len(), 2);
}
