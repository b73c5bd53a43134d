#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Registration Notifier
//!
//! Web service behind the Western Ghats X event registration flow.
//!
//! ## Overview
//!
//! After a team registers for the Saravanampatti Blasters League, the front end
//! stores the registration in the hosted backend and then calls this service.
//! The service renders two HTML emails, a confirmation for the team captain
//! and a notification for the organizers, and delivers both through the
//! organization's SMTP relay.
//!
//! ## Module Organization
//!
//! - [`notifier`] - The linear notification flow
//! - [`email`] - Email documents, outgoing messages and the SMTP transport
//! - [`models`] - Request, response and registration record types
//! - [`backend`] - Process-wide hosted backend handle and REST client
//! - [`site`] - Static footer navigation and contact data
//! - [`web`] - axum router, handlers and middleware
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Tagged error type
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use registration_notifier::{email::SmtpMailTransport, web, NotifierConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = NotifierConfig::from_env()?;
//! let transport = Arc::new(SmtpMailTransport::new(config.smtp.clone()));
//! let state = web::AppState::new(config, transport, None);
//! web::serve(state, registration_notifier::shutdown::shutdown_signal()).await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod constants;
pub mod email;
pub mod error;
pub mod logging;
pub mod models;
pub mod notifier;
pub mod shutdown;
pub mod site;
pub mod test_utils;
pub mod web;

pub use config::NotifierConfig;
pub use error::{NotificationError, Result};
pub use models::{NotificationResult, Player, RegistrationNotificationRequest, TeamData};
pub use notifier::RegistrationNotifier;
