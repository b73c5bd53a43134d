//! # Registration Notification Handlers
//!
//! `OPTIONS` answers the pre-flight without touching the body. Every other
//! method is treated as the notification call: the raw body is handed to the
//! notifier so malformed JSON lands in the same failure envelope as an SMTP
//! error instead of an extractor rejection.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::logging::log_notification_failure;
use crate::web::middleware::request_id::RequestId;
use crate::web::response_types::NotificationResponse;
use crate::web::state::AppState;

/// Pre-flight: `OPTIONS` → `200`, empty body. CORS headers come from middleware.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Send the registrant and admin emails for one registration
pub async fn send_registration_email(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
    body: Bytes,
) -> NotificationResponse {
    match state.notifier.notify_from_json(&body).await {
        Ok(()) => NotificationResponse::sent(),
        Err(err) => {
            let request_id = request_id.as_ref().map(|Extension(id)| id.as_str());
            log_notification_failure(request_id, err.kind(), &err.to_string());
            NotificationResponse::from(&err)
        }
    }
}
