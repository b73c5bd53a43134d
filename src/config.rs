//! # Service Configuration
//!
//! Layered configuration: built-in defaults first, then process environment.
//! SMTP host and port are fixed in [`crate::constants::smtp`]; only the
//! credentials come from the environment.

use config::{Config, Environment};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use crate::constants;
use crate::error::{NotificationError, Result};

/// SMTP credentials. `Debug` never prints the password.
#[derive(Clone, Default, Deserialize, PartialEq)]
pub struct SmtpCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub credentials: SmtpCredentials,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: constants::smtp::HOST.to_string(),
            port: constants::smtp::PORT,
            credentials: SmtpCredentials::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    pub registrations_table: String,
    pub timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: constants::backend::DEFAULT_URL.to_string(),
            anon_key: constants::backend::DEFAULT_ANON_KEY.to_string(),
            registrations_table: constants::backend::REGISTRATIONS_TABLE.to_string(),
            timeout_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WebConfig {
    pub bind_address: String,
    pub request_timeout_seconds: u64,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_seconds: 30,
        }
    }
}

impl WebConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

/// Flat view of the environment as the `config` crate sees it
#[derive(Debug, Default, Deserialize)]
struct EnvOverrides {
    smtp_username: Option<String>,
    smtp_password: Option<String>,
    notifier_bind_address: Option<String>,
    notifier_request_timeout_seconds: Option<u64>,
    backend_url: Option<String>,
    backend_anon_key: Option<String>,
    backend_registrations_table: Option<String>,
    backend_timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotifierConfig {
    pub smtp: SmtpConfig,
    pub backend: BackendConfig,
    pub web: WebConfig,
}

impl NotifierConfig {
    /// Load defaults overlaid with the process environment.
    ///
    /// Missing SMTP credentials are not an error: they become empty strings and
    /// the relay rejects them at send time.
    pub fn from_env() -> Result<Self> {
        let source = Config::builder()
            .add_source(Environment::default())
            .build()?;
        let overrides: EnvOverrides = source.try_deserialize()?;
        Self::from_overrides(overrides)
    }

    fn from_overrides(overrides: EnvOverrides) -> Result<Self> {
        let mut config = Self::default();

        config.smtp.credentials.username = overrides.smtp_username.unwrap_or_default();
        config.smtp.credentials.password = overrides.smtp_password.unwrap_or_default();

        if let Some(bind_address) = overrides.notifier_bind_address {
            config.web.bind_address = bind_address;
        }
        if let Some(timeout) = overrides.notifier_request_timeout_seconds {
            config.web.request_timeout_seconds = timeout;
        }
        if let Some(url) = overrides.backend_url {
            config.backend.url = url;
        }
        if let Some(key) = overrides.backend_anon_key {
            config.backend.anon_key = key;
        }
        if let Some(table) = overrides.backend_registrations_table {
            config.backend.registrations_table = table;
        }
        if let Some(timeout) = overrides.backend_timeout_ms {
            config.backend.timeout_ms = timeout;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.web.bind_address.parse::<std::net::SocketAddr>().is_err() {
            return Err(NotificationError::configuration(format!(
                "Invalid bind address: {}",
                self.web.bind_address
            )));
        }
        if self.web.request_timeout_seconds == 0 {
            return Err(NotificationError::configuration(
                "request_timeout_seconds must be greater than zero",
            ));
        }
        if !self.backend.url.starts_with("http://") && !self.backend.url.starts_with("https://")
        {
            return Err(NotificationError::configuration(format!(
                "Invalid backend URL: {}",
                self.backend.url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_fixed_relay() {
        let config = NotifierConfig::default();
        assert_eq!(config.smtp.host, "smtp.hostinger.com");
        assert_eq!(config.smtp.port, 465);
        assert!(config.smtp.credentials.username.is_empty());
        assert_eq!(config.web.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides_apply() {
        let config = NotifierConfig::from_overrides(EnvOverrides {
            smtp_username: Some("events@westernghatsx.in".to_string()),
            smtp_password: Some("hunter2".to_string()),
            notifier_bind_address: Some("127.0.0.1:9000".to_string()),
            ..Default::default()
        })
        .expect("valid overrides");

        assert_eq!(config.smtp.credentials.username, "events@westernghatsx.in");
        assert_eq!(config.smtp.credentials.password, "hunter2");
        assert_eq!(config.web.bind_address, "127.0.0.1:9000");
        assert_eq!(config.smtp.host, "smtp.hostinger.com");
    }

    #[test]
    fn test_invalid_bind_address_rejected() {
        let result = NotifierConfig::from_overrides(EnvOverrides {
            notifier_bind_address: Some("not-an-address".to_string()),
            ..Default::default()
        });
        assert!(matches!(result, Err(NotificationError::Configuration(_))));
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = SmtpCredentials {
            username: "user".to_string(),
            password: "secret".to_string(),
        };
        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("REDACTED"));
    }
}
