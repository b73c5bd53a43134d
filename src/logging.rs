//! # Structured Logging Module
//!
//! Environment-aware structured logging. Console output is human-readable by
//! default and switches to JSON lines when `NOTIFIER_LOG_FORMAT=json`.

use chrono::Utc;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Initialize structured logging once per process
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = get_log_level(&environment);
        let format = get_log_format();

        // RUST_LOG wins over the environment default
        let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        let console = match format {
            LogFormat::Pretty => fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(true)
                .with_filter(filter())
                .boxed(),
            LogFormat::Json => fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .json()
                .with_filter(filter())
                .boxed(),
        };

        if tracing_subscriber::registry().with(console).try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized - continuing with existing subscriber");
        }

        tracing::info!(
            pid = std::process::id(),
            environment = %environment,
            format = ?format,
            "Structured logging initialized"
        );
    });
}

fn get_environment() -> String {
    std::env::var("NOTIFIER_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

fn get_log_level(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        _ => "debug",
    }
}

fn get_log_format() -> LogFormat {
    std::env::var("NOTIFIER_LOG_FORMAT")
        .map(|value| LogFormat::parse(&value))
        .unwrap_or(LogFormat::Pretty)
}

/// Log one notification failure with its tagged kind
pub fn log_notification_failure(request_id: Option<&str>, kind: &str, error: &str) {
    tracing::error!(
        request_id = request_id,
        kind = %kind,
        error = %error,
        timestamp = %Utc::now().to_rfc3339(),
        "Error in send-cricket-registration-email function"
    );
}
