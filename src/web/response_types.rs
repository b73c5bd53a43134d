//! # Web Response Types
//!
//! HTTP conversions for the notification envelope and for the ambient
//! endpoints' errors. Every notification failure, whatever its kind, maps to
//! `500` with the same `{success:false, error}` shape.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::error::NotificationError;
use crate::models::NotificationResult;

/// Outcome of one notification invocation as sent over HTTP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationResponse {
    pub status: StatusCode,
    pub body: NotificationResult,
}

impl NotificationResponse {
    pub fn sent() -> Self {
        Self {
            status: StatusCode::OK,
            body: NotificationResult::sent(),
        }
    }
}

impl From<&NotificationError> for NotificationResponse {
    fn from(err: &NotificationError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: NotificationResult::failed(err.to_string()),
        }
    }
}

impl IntoResponse for NotificationResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Errors from the health and site endpoints
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Service temporarily unavailable: {reason}")]
    ServiceUnavailable { reason: String },
}

impl ApiError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            reason: reason.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_code, message) = match &self {
            ApiError::ServiceUnavailable { reason } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                reason.as_str(),
            ),
        };

        let error_response = json!({
            "error": {
                "code": error_code,
                "message": message
            }
        });

        (status_code, Json(error_response)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
