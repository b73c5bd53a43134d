//! # Web Application State
//!
//! Shared, immutable state handed to every request handler.

use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::backend::RegistrationStore;
use crate::config::NotifierConfig;
use crate::email::MailTransport;
use crate::notifier::RegistrationNotifier;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<NotifierConfig>,
    pub notifier: RegistrationNotifier,
    /// Hosted backend, if one was initialized for this process
    pub backend: Option<Arc<dyn RegistrationStore>>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        config: NotifierConfig,
        transport: Arc<dyn MailTransport>,
        backend: Option<Arc<dyn RegistrationStore>>,
    ) -> Self {
        info!(
            bind_address = %config.web.bind_address,
            smtp_host = %config.smtp.host,
            smtp_port = config.smtp.port,
            backend_configured = backend.is_some(),
            "Web application state created"
        );

        Self {
            config: Arc::new(config),
            notifier: RegistrationNotifier::new(transport),
            backend,
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("backend_configured", &self.backend.is_some())
            .finish_non_exhaustive()
    }
}
