use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewRegistration, RegistrationRecord};

/// Persistence for registration rows in the hosted backend
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    async fn create_registration(&self, registration: &NewRegistration)
        -> Result<RegistrationRecord>;

    async fn fetch_registration(&self, id: &str) -> Result<Option<RegistrationRecord>>;

    /// Cheap reachability probe used by the readiness endpoint
    async fn health_check(&self) -> Result<()>;
}
