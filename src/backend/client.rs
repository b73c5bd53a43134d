//! # Hosted Backend Client
//!
//! HTTP client for the hosted backend's REST interface. Authenticates with the
//! published anonymous key, which is sent both as `apikey` and as a bearer token.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, error};

use super::store::RegistrationStore;
use crate::config::BackendConfig;
use crate::constants::backend::REST_PATH;
use crate::error::{NotificationError, Result};
use crate::models::{NewRegistration, RegistrationRecord};

#[derive(Clone)]
pub struct HostedBackendClient {
    client: Client,
    base_url: Url,
    table: String,
}

impl std::fmt::Debug for HostedBackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedBackendClient")
            .field("base_url", &self.base_url.as_str())
            .field("table", &self.table)
            .finish()
    }
}

impl HostedBackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let base_url = Url::parse(&config.url).map_err(|e| {
            NotificationError::configuration(format!("Invalid backend URL: {e}"))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(&config.anon_key).map_err(|e| {
                NotificationError::configuration(format!("Invalid backend key: {e}"))
            })?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.anon_key)).map_err(|e| {
                NotificationError::configuration(format!("Invalid backend key: {e}"))
            })?,
        );

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(format!("registration-notifier/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url,
            table: config.registrations_table.clone(),
        })
    }

    fn rest_url(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{REST_PATH}{path}"))
            .map_err(|e| NotificationError::backend(format!("Invalid request URL: {e}")))
    }

    fn table_url(&self) -> Result<Url> {
        self.rest_url(&format!("/{}", self.table))
    }

    async fn error_for_status(response: reqwest::Response, operation: &str) -> NotificationError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        error!(operation, status = %status, body = %body, "Backend request failed");
        NotificationError::backend(format!("{operation} failed with status {status}: {body}"))
    }
}

#[async_trait]
impl RegistrationStore for HostedBackendClient {
    async fn create_registration(
        &self,
        registration: &NewRegistration,
    ) -> Result<RegistrationRecord> {
        let url = self.table_url()?;
        debug!(url = %url, team_name = %registration.team_name, "Creating registration row");

        let response = self
            .client
            .post(url)
            .header("Prefer", "return=representation")
            .json(&[registration])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for_status(response, "create_registration").await);
        }

        let mut rows: Vec<RegistrationRecord> = response.json().await?;
        if rows.is_empty() {
            return Err(NotificationError::backend(
                "create_registration returned no rows",
            ));
        }
        Ok(rows.swap_remove(0))
    }

    async fn fetch_registration(&self, id: &str) -> Result<Option<RegistrationRecord>> {
        let mut url = self.table_url()?;
        url.query_pairs_mut()
            .append_pair("id", &format!("eq.{id}"))
            .append_pair("select", "*");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_for_status(response, "fetch_registration").await);
        }

        let rows: Vec<RegistrationRecord> = response.json().await?;
        Ok(rows.into_iter().next())
    }

    async fn health_check(&self) -> Result<()> {
        let response = self.client.get(self.rest_url("/")?).send().await?;
        match response.status() {
            status if status.is_success() => Ok(()),
            // Anonymous keys may not list the schema; the service is still reachable
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(()),
            _ => Err(Self::error_for_status(response, "health_check").await),
        }
    }
}
