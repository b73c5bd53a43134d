//! # Registration Records
//!
//! Row shapes for the hosted backend's registrations table. Column names are
//! snake_case as stored; `players` is a JSON column.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::registration::{Player, RegistrationNotificationRequest, TeamData};

/// Insert payload for a new registration row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRegistration {
    pub team_name: String,
    pub captain_name: String,
    pub captain_phone: String,
    pub captain_email: String,
    pub players: Vec<Player>,
    pub payment_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_amount: Option<f64>,
}

impl NewRegistration {
    pub fn from_team(team: TeamData, payment_status: impl Into<String>) -> Self {
        Self {
            team_name: team.team_name,
            captain_name: team.captain_name,
            captain_phone: team.captain_phone,
            captain_email: team.captain_email,
            players: team.players,
            payment_status: payment_status.into(),
            payment_amount: None,
        }
    }

    pub fn with_payment_amount(mut self, amount: f64) -> Self {
        self.payment_amount = Some(amount);
        self
    }
}

/// Stored registration row as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub id: String,
    #[serde(flatten)]
    pub registration: NewRegistration,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl RegistrationRecord {
    /// Build the payload the notification endpoint expects for this row
    pub fn notification_request(&self) -> RegistrationNotificationRequest {
        let registration = &self.registration;
        RegistrationNotificationRequest {
            team_data: TeamData {
                team_name: registration.team_name.clone(),
                captain_name: registration.captain_name.clone(),
                captain_phone: registration.captain_phone.clone(),
                captain_email: registration.captain_email.clone(),
                players: registration.players.clone(),
            },
            payment_status: registration.payment_status.clone(),
            registration_id: self.id.clone(),
            payment_amount: registration.payment_amount,
        }
    }
}
