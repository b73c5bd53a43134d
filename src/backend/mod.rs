//! # Hosted Backend Handle
//!
//! Process-wide access to the hosted backend-as-a-service. The handle is set
//! once by an explicit [`init`] call during startup and lives until the process
//! exits; there is no teardown. Anything implementing [`RegistrationStore`]
//! can be installed, so tests substitute an in-memory store.

pub mod client;
pub mod store;

use std::sync::{Arc, OnceLock};
use tracing::info;

use crate::error::{NotificationError, Result};

pub use client::HostedBackendClient;
pub use store::RegistrationStore;

static BACKEND: OnceLock<Arc<dyn RegistrationStore>> = OnceLock::new();

/// Install the process-wide backend. A second call is an error.
pub fn init(store: Arc<dyn RegistrationStore>) -> Result<Arc<dyn RegistrationStore>> {
    BACKEND
        .set(store)
        .map_err(|_| NotificationError::BackendAlreadyInitialized)?;
    info!("Hosted backend handle initialized");
    handle()
}

/// The installed backend, or `BackendNotInitialized` before [`init`].
pub fn handle() -> Result<Arc<dyn RegistrationStore>> {
    BACKEND
        .get()
        .cloned()
        .ok_or(NotificationError::BackendNotInitialized)
}

pub fn is_initialized() -> bool {
    BACKEND.get().is_some()
}
