//! # Registration Emails
//!
//! Rendering of the registrant and admin documents, the outgoing message type,
//! and the transport seam with its SMTP implementation.

pub mod format;
pub mod message;
pub mod smtp;
pub mod templates;
pub mod transport;

pub use message::{Audience, OutgoingEmail};
pub use smtp::SmtpMailTransport;
pub use transport::{MailSession, MailTransport};
