//! # Registration Notifier
//!
//! Linear notification flow for one registration: parse, open a mail session,
//! send the registrant confirmation, send the admin notification, close.
//!
//! Sends are sequential and fail-fast. A failed registrant send means the admin
//! send is never attempted, and nothing is retried. On any failure the session
//! is still closed before the error is returned.
//!
//! ```rust
//! use std::sync::Arc;
//! use registration_notifier::test_utils::{sample_request, RecordingTransport};
//! use registration_notifier::RegistrationNotifier;
//!
//! # tokio_test::block_on(async {
//! let transport = Arc::new(RecordingTransport::new());
//! let notifier = RegistrationNotifier::new(transport.clone());
//!
//! notifier.notify(&sample_request()).await.unwrap();
//! assert_eq!(transport.sent().len(), 2);
//! # });
//! ```

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::email::{MailSession, MailTransport, OutgoingEmail};
use crate::error::Result;
use crate::models::RegistrationNotificationRequest;

#[derive(Clone)]
pub struct RegistrationNotifier {
    transport: Arc<dyn MailTransport>,
}

impl std::fmt::Debug for RegistrationNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationNotifier").finish_non_exhaustive()
    }
}

impl RegistrationNotifier {
    pub fn new(transport: Arc<dyn MailTransport>) -> Self {
        Self { transport }
    }

    /// Parse a raw JSON body and notify. Parse failures surface as errors.
    pub async fn notify_from_json(&self, body: &[u8]) -> Result<()> {
        let request: RegistrationNotificationRequest = serde_json::from_slice(body)?;
        self.notify(&request).await
    }

    pub async fn notify(&self, request: &RegistrationNotificationRequest) -> Result<()> {
        info!(
            registration_id = %request.registration_id,
            team_name = %request.team_data.team_name,
            payment_status = %request.payment_status,
            player_count = request.team_data.players.len(),
            "Sending registration emails"
        );

        let mut session = self.transport.open_session().await?;

        let registrant = OutgoingEmail::registrant(request);
        let admin = OutgoingEmail::admin(request);

        if let Err(err) = Self::send_all(session.as_mut(), [&registrant, &admin]).await {
            if let Err(close_err) = session.close().await {
                warn!(error = %close_err, "Failed to close SMTP session after send failure");
            }
            return Err(err);
        }

        session.close().await?;

        info!(
            registration_id = %request.registration_id,
            "Registration emails sent successfully"
        );
        Ok(())
    }

    async fn send_all(session: &mut dyn MailSession, emails: [&OutgoingEmail; 2]) -> Result<()> {
        for email in emails {
            session.send(email).await?;
            debug!(audience = email.audience.as_str(), to = %email.to, "Email sent");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::Audience;
    use crate::error::NotificationError;
    use crate::test_utils::{sample_request, RecordingTransport};

    #[tokio::test]
    async fn test_sends_registrant_then_admin() {
        let transport = Arc::new(RecordingTransport::new());
        let notifier = RegistrationNotifier::new(transport.clone());

        notifier.notify(&sample_request()).await.expect("notify succeeds");

        let sent = transport.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].audience, Audience::Registrant);
        assert_eq!(sent[0].to, "ravi@x.com");
        assert_eq!(sent[1].audience, Audience::Admin);
        assert_eq!(sent[1].to, "events@westernghatsx.in");
        assert_eq!(transport.sessions_opened(), 1);
        assert_eq!(transport.sessions_closed(), 1);
    }

    #[tokio::test]
    async fn test_registrant_failure_skips_admin_send() {
        let transport = Arc::new(RecordingTransport::failing_on_send(1, "550 mailbox unavailable"));
        let notifier = RegistrationNotifier::new(transport.clone());

        let err = notifier.notify(&sample_request()).await.unwrap_err();

        assert_eq!(err.to_string(), "550 mailbox unavailable");
        assert_eq!(transport.send_attempts(), 1);
        assert!(transport.sent().is_empty());
        assert_eq!(transport.sessions_closed(), 1);
    }

    #[tokio::test]
    async fn test_admin_failure_after_registrant_success() {
        let transport = Arc::new(RecordingTransport::failing_on_send(2, "connection reset"));
        let notifier = RegistrationNotifier::new(transport.clone());

        let err = notifier.notify(&sample_request()).await.unwrap_err();

        assert!(matches!(err, NotificationError::Transport(_)));
        assert_eq!(transport.send_attempts(), 2);
        assert_eq!(transport.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_session_open_failure_sends_nothing() {
        let transport = Arc::new(RecordingTransport::failing_on_open("535 authentication failed"));
        let notifier = RegistrationNotifier::new(transport.clone());

        let err = notifier.notify(&sample_request()).await.unwrap_err();

        assert!(matches!(err, NotificationError::Auth(_)));
        assert_eq!(transport.send_attempts(), 0);
    }

    #[tokio::test]
    async fn test_malformed_json_never_opens_session() {
        let transport = Arc::new(RecordingTransport::new());
        let notifier = RegistrationNotifier::new(transport.clone());

        let err = notifier.notify_from_json(b"{\"teamData\":").await.unwrap_err();

        assert!(matches!(err, NotificationError::Parse(_)));
        assert_eq!(transport.sessions_opened(), 0);
    }
}
