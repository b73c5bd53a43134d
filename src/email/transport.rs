//! # Mail Transport Seam
//!
//! The notifier talks to mail delivery only through these traits so the SMTP
//! relay can be swapped for a recording double in tests.

use async_trait::async_trait;

use super::message::OutgoingEmail;
use crate::error::Result;

/// Factory for per-invocation mail sessions
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Connect and authenticate. Sessions are never shared between invocations.
    async fn open_session(&self) -> Result<Box<dyn MailSession>>;
}

/// One authenticated connection to the relay
#[async_trait]
pub trait MailSession: Send {
    async fn send(&mut self, email: &OutgoingEmail) -> Result<()>;

    async fn close(self: Box<Self>) -> Result<()>;
}
