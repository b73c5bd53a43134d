//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use std::sync::Arc;

use registration_notifier::backend::RegistrationStore;
use registration_notifier::test_utils::RecordingTransport;
use registration_notifier::web::{create_app, AppState};
use registration_notifier::NotifierConfig;

pub const NOTIFY_PATH: &str = "/functions/v1/send-cricket-registration-email";

pub fn app_with(
    transport: Arc<RecordingTransport>,
    backend: Option<Arc<dyn RegistrationStore>>,
) -> Router {
    create_app(AppState::new(NotifierConfig::default(), transport, backend))
}

pub fn post_json(path: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .expect("valid request")
}

pub fn empty_request(method: Method, path: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .expect("valid request")
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("readable body")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("JSON body")
}

pub fn assert_cors_headers(response: &Response<Body>) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-headers"],
        "authorization, x-client-info, apikey, content-type"
    );
}
