//! # Notification Errors
//!
//! Every failure the notification path can hit is tagged here so logs can tell a
//! malformed payload from an SMTP outage. Callers still observe one uniform
//! failure envelope; see [`crate::web::response_types`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotificationError {
    /// Request body was not valid JSON or was missing required fields
    #[error("{0}")]
    Parse(String),

    /// SMTP connection, TLS negotiation or delivery failed
    #[error("{0}")]
    Transport(String),

    /// SMTP relay rejected the configured credentials
    #[error("{0}")]
    Auth(String),

    /// An outgoing message could not be built (bad mailbox, bad header)
    #[error("{0}")]
    Message(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Hosted backend request failed or returned an error status
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Hosted backend client has not been initialized")]
    BackendNotInitialized,

    #[error("Hosted backend client is already initialized")]
    BackendAlreadyInitialized,
}

impl NotificationError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Short tag used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse",
            Self::Transport(_) => "transport",
            Self::Auth(_) => "auth",
            Self::Message(_) => "message",
            Self::Configuration(_) => "configuration",
            Self::Backend(_) | Self::BackendNotInitialized | Self::BackendAlreadyInitialized => {
                "backend"
            }
        }
    }
}

impl From<serde_json::Error> for NotificationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<lettre::error::Error> for NotificationError {
    fn from(err: lettre::error::Error) -> Self {
        Self::Message(err.to_string())
    }
}

impl From<lettre::address::AddressError> for NotificationError {
    fn from(err: lettre::address::AddressError) -> Self {
        Self::Message(format!("Invalid email address: {err}"))
    }
}

impl From<lettre::transport::smtp::Error> for NotificationError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        // 535 and friends are permanent 5xx replies to AUTH
        let is_auth = err.is_permanent()
            && err
                .status()
                .map(|code| code.to_string().starts_with("53"))
                .unwrap_or(false);
        if is_auth {
            Self::Auth(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<reqwest::Error> for NotificationError {
    fn from(err: reqwest::Error) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<config::ConfigError> for NotificationError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NotificationError>;
