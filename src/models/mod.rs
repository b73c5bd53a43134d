//! # Data Model
//!
//! Transient request/response types for one notification invocation, plus the
//! registration record shape stored in the hosted backend.

pub mod notification_result;
pub mod registration;
pub mod registration_record;

pub use notification_result::NotificationResult;
pub use registration::{PaymentStyle, Player, RegistrationNotificationRequest, TeamData};
pub use registration_record::{NewRegistration, RegistrationRecord};
