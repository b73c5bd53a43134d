//! # SMTP Relay Transport
//!
//! `lettre` implementation of [`MailTransport`] against the organization's
//! relay over implicit TLS.

use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::PoolConfig;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::{debug, info};

use super::message::OutgoingEmail;
use super::transport::{MailSession, MailTransport};
use crate::config::SmtpConfig;
use crate::error::{NotificationError, Result};

#[derive(Debug, Clone)]
pub struct SmtpMailTransport {
    config: SmtpConfig,
}

impl SmtpMailTransport {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SmtpConfig {
        &self.config
    }

    fn build_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
        let credentials = Credentials::new(
            self.config.credentials.username.clone(),
            self.config.credentials.password.clone(),
        );

        // relay() negotiates TLS on connect (SMTPS)
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.host)?
            .port(self.config.port)
            .credentials(credentials)
            .pool_config(PoolConfig::new().max_size(1))
            .build();
        Ok(transport)
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn open_session(&self) -> Result<Box<dyn MailSession>> {
        debug!(
            host = %self.config.host,
            port = self.config.port,
            username = %self.config.credentials.username,
            "Opening SMTP session"
        );

        let transport = self.build_transport()?;
        if !transport.test_connection().await? {
            return Err(NotificationError::transport(format!(
                "SMTP relay {}:{} did not accept the connection",
                self.config.host, self.config.port
            )));
        }

        info!(host = %self.config.host, "SMTP session established");
        Ok(Box::new(SmtpSession { transport }))
    }
}

struct SmtpSession {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

#[async_trait]
impl MailSession for SmtpSession {
    async fn send(&mut self, email: &OutgoingEmail) -> Result<()> {
        let message = email.to_message()?;
        let response = self.transport.send(message).await?;

        debug!(
            audience = email.audience.as_str(),
            to = %email.to,
            code = %response.code(),
            "Email accepted by relay"
        );
        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<()> {
        // Dropping the transport shuts down its pooled connection
        drop(self.transport);
        debug!("SMTP session closed");
        Ok(())
    }
}
