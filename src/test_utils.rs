//! # Test Utilities
//!
//! Sample payloads and in-process doubles for the mail transport and the
//! hosted backend. Used by unit tests and by the integration tests under
//! `tests/`.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::backend::RegistrationStore;
use crate::email::{MailSession, MailTransport, OutgoingEmail};
use crate::error::{NotificationError, Result};
use crate::models::{
    NewRegistration, Player, RegistrationNotificationRequest, RegistrationRecord, TeamData,
};

/// The `Blasters` registration used throughout the tests
pub fn sample_request() -> RegistrationNotificationRequest {
    RegistrationNotificationRequest {
        team_data: TeamData {
            team_name: "Blasters".to_string(),
            captain_name: "Ravi".to_string(),
            captain_phone: "999".to_string(),
            captain_email: "ravi@x.com".to_string(),
            players: vec![Player::new("A", "10")],
        },
        payment_status: "completed".to_string(),
        registration_id: "R1".to_string(),
        payment_amount: Some(500.0),
    }
}

/// Same payload as [`sample_request`] in its JSON wire form
pub fn sample_request_json() -> serde_json::Value {
    serde_json::json!({
        "teamData": {
            "teamName": "Blasters",
            "captainName": "Ravi",
            "captainPhone": "999",
            "captainEmail": "ravi@x.com",
            "players": [{"name": "A", "age": "10"}]
        },
        "paymentStatus": "completed",
        "registrationId": "R1",
        "paymentAmount": 500
    })
}

#[derive(Debug, Default)]
struct TransportLog {
    sent: Mutex<Vec<OutgoingEmail>>,
    send_attempts: AtomicUsize,
    sessions_opened: AtomicUsize,
    sessions_closed: AtomicUsize,
}

/// Mail transport that records messages instead of delivering them.
///
/// Can fail session setup (as an auth rejection) or fail the Nth send
/// (1-based, as a transport error).
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    log: Arc<TransportLog>,
    fail_open: Option<String>,
    fail_on_send: Option<(usize, String)>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on_open(message: impl Into<String>) -> Self {
        Self {
            fail_open: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn failing_on_send(attempt: usize, message: impl Into<String>) -> Self {
        Self {
            fail_on_send: Some((attempt, message.into())),
            ..Self::default()
        }
    }

    /// Emails accepted so far, in send order
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.log.sent.lock().clone()
    }

    pub fn send_attempts(&self) -> usize {
        self.log.send_attempts.load(Ordering::SeqCst)
    }

    pub fn sessions_opened(&self) -> usize {
        self.log.sessions_opened.load(Ordering::SeqCst)
    }

    pub fn sessions_closed(&self) -> usize {
        self.log.sessions_closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn open_session(&self) -> Result<Box<dyn MailSession>> {
        if let Some(message) = &self.fail_open {
            return Err(NotificationError::auth(message.clone()));
        }
        self.log.sessions_opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(RecordingSession {
            log: self.log.clone(),
            fail_on_send: self.fail_on_send.clone(),
        }))
    }
}

struct RecordingSession {
    log: Arc<TransportLog>,
    fail_on_send: Option<(usize, String)>,
}

#[async_trait]
impl MailSession for RecordingSession {
    async fn send(&mut self, email: &OutgoingEmail) -> Result<()> {
        let attempt = self.log.send_attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some((failing_attempt, message)) = &self.fail_on_send {
            if *failing_attempt == attempt {
                return Err(NotificationError::transport(message.clone()));
            }
        }
        self.log.sent.lock().push(email.clone());
        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.log.sessions_closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Registration store kept in memory; ids are sequential
#[derive(Debug, Default)]
pub struct InMemoryRegistrationStore {
    rows: Mutex<Vec<RegistrationRecord>>,
    unhealthy: bool,
}

impl InMemoryRegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unhealthy() -> Self {
        Self {
            unhealthy: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RegistrationStore for InMemoryRegistrationStore {
    async fn create_registration(
        &self,
        registration: &NewRegistration,
    ) -> Result<RegistrationRecord> {
        let mut rows = self.rows.lock();
        let record = RegistrationRecord {
            id: format!("REG-{}", rows.len() + 1),
            registration: registration.clone(),
            created_at: Some(chrono::Utc::now()),
        };
        rows.push(record.clone());
        Ok(record)
    }

    async fn fetch_registration(&self, id: &str) -> Result<Option<RegistrationRecord>> {
        Ok(self.rows.lock().iter().find(|row| row.id == id).cloned())
    }

    async fn health_check(&self) -> Result<()> {
        if self.unhealthy {
            return Err(NotificationError::backend("backend unreachable"));
        }
        Ok(())
    }
}
