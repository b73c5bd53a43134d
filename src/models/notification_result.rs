use serde::{Deserialize, Serialize};

use crate::constants::SUCCESS_MESSAGE;

/// Envelope returned to the caller of the notification endpoint.
///
/// Serializes as `{"success":true,"message":...}` or
/// `{"success":false,"error":...}`; the absent field is omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NotificationResult {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: Some(SUCCESS_MESSAGE.to_string()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}
