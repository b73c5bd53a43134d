//! # Registration Notification Request
//!
//! Wire shape of the payload posted after a registration row is created.
//! Field names follow the caller's camelCase JSON.

use serde::{Deserialize, Serialize};

use crate::constants::PAYMENT_STATUS_COMPLETED;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub age: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Player {
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            phone: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamData {
    pub team_name: String,
    pub captain_name: String,
    pub captain_phone: String,
    pub captain_email: String,
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationNotificationRequest {
    pub team_data: TeamData,
    pub payment_status: String,
    pub registration_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_amount: Option<f64>,
}

impl RegistrationNotificationRequest {
    pub fn payment_style(&self) -> PaymentStyle {
        PaymentStyle::from_status(&self.payment_status)
    }

    /// Amount to print, if any. Zero counts as absent.
    pub fn displayable_amount(&self) -> Option<f64> {
        self.payment_amount.filter(|amount| *amount != 0.0)
    }
}

/// Visual treatment of the payment banner in the registrant email
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStyle {
    Success,
    Pending,
}

impl PaymentStyle {
    /// Only the exact string `completed` is a success; anything else is pending.
    pub fn from_status(status: &str) -> Self {
        if status == PAYMENT_STATUS_COMPLETED {
            Self::Success
        } else {
            Self::Pending
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Pending => "pending",
        }
    }
}
