use lettre::message::{Mailbox, MultiPart};
use lettre::Message;

use super::templates::{admin_document, registrant_document};
use crate::constants::mail;
use crate::error::Result;
use crate::models::RegistrationNotificationRequest;

/// Which side of the registration a message is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Registrant,
    Admin,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registrant => "registrant",
            Self::Admin => "admin",
        }
    }
}

/// A rendered email ready for a transport.
///
/// The same HTML document is used for both the plain-text and HTML parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub audience: Audience,
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingEmail {
    pub fn registrant(request: &RegistrationNotificationRequest) -> Self {
        Self {
            audience: Audience::Registrant,
            from: mail::SENDER.to_string(),
            to: request.team_data.captain_email.clone(),
            subject: format!(
                "{}{}",
                mail::REGISTRANT_SUBJECT_PREFIX,
                request.team_data.team_name
            ),
            body: registrant_document(request),
        }
    }

    pub fn admin(request: &RegistrationNotificationRequest) -> Self {
        Self {
            audience: Audience::Admin,
            from: mail::SENDER.to_string(),
            to: mail::ADMIN_INBOX.to_string(),
            subject: format!("{}{}", mail::ADMIN_SUBJECT_PREFIX, request.team_data.team_name),
            body: admin_document(request),
        }
    }

    /// Build the MIME message. Fails on unparseable mailboxes.
    pub fn to_message(&self) -> Result<Message> {
        let message = Message::builder()
            .from(self.from.parse::<Mailbox>()?)
            .to(self.to.parse::<Mailbox>()?)
            .subject(self.subject.as_str())
            .multipart(MultiPart::alternative_plain_html(
                self.body.clone(),
                self.body.clone(),
            ))?;
        Ok(message)
    }
}
