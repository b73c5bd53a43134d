//! Registration Notifier Server
//!
//! Loads configuration from the environment, installs the hosted backend handle
//! and serves the notification API until Ctrl-C or SIGTERM.
//!
//! ```bash
//! SMTP_USERNAME=events@westernghatsx.in SMTP_PASSWORD=... \
//! NOTIFIER_BIND_ADDRESS=0.0.0.0:8080 \
//! registration-notifier
//! ```

use anyhow::Context;
use std::sync::Arc;
use tracing::info;

use registration_notifier::backend::{self, HostedBackendClient};
use registration_notifier::email::SmtpMailTransport;
use registration_notifier::logging::init_structured_logging;
use registration_notifier::shutdown::shutdown_signal;
use registration_notifier::web::{self, AppState};
use registration_notifier::NotifierConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_structured_logging();

    let config = NotifierConfig::from_env().context("loading configuration")?;

    let backend_client =
        HostedBackendClient::new(&config.backend).context("creating hosted backend client")?;
    let backend = backend::init(Arc::new(backend_client))
        .context("initializing hosted backend handle")?;

    let transport = Arc::new(SmtpMailTransport::new(config.smtp.clone()));

    info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.web.bind_address,
        "Starting registration notifier"
    );

    let state = AppState::new(config, transport, Some(backend));
    web::serve(state, shutdown_signal())
        .await
        .context("serving HTTP API")?;

    Ok(())
}
