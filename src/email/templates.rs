//! # Email Documents
//!
//! HTML bodies for the registrant confirmation and the organizer notification.
//! Values are interpolated verbatim.

use super::format::{grouped_amount, players_list};
use crate::models::RegistrationNotificationRequest;

const REGISTRANT_STYLES: &str = r#"        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
        .container { max-width: 600px; margin: 0 auto; padding: 20px; }
        .header { background: linear-gradient(135deg, #4CAF50, #2196F3); color: white; padding: 20px; text-align: center; }
        .content { padding: 20px; background: #f9f9f9; }
        .details { background: white; padding: 15px; margin: 10px 0; border-radius: 5px; }
        .status { padding: 10px; margin: 10px 0; border-radius: 5px; text-align: center; font-weight: bold; }
        .success { background: #d4edda; color: #155724; }
        .pending { background: #fff3cd; color: #856404; }"#;

const ADMIN_STYLES: &str = r#"        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
        .container { max-width: 600px; margin: 0 auto; padding: 20px; }
        .header { background: #333; color: white; padding: 20px; text-align: center; }
        .content { padding: 20px; background: #f9f9f9; }
        .details { background: white; padding: 15px; margin: 10px 0; border-radius: 5px; }"#;

/// Confirmation sent to the team captain
pub fn registrant_document(request: &RegistrationNotificationRequest) -> String {
    let team = &request.team_data;
    let amount_line = request
        .displayable_amount()
        .map(|amount| format!("\nAmount: ₹{}", grouped_amount(amount)))
        .unwrap_or_default();

    format!(
        r#"
<!DOCTYPE html>
<html>
<head>
    <style>
{styles}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>🏏 Cricket Tournament Registration</h1>
            <h2>Western Ghats X</h2>
        </div>

        <div class="content">
            <h3>Dear {captain_name},</h3>
            <p>Thank you for registering your team for the Saravanampatti Blasters League!</p>

            <div class="details">
                <h4>Team Details:</h4>
                <p><strong>Team Name:</strong> {team_name}</p>
                <p><strong>Captain:</strong> {captain_name}</p>
                <p><strong>Phone:</strong> {captain_phone}</p>
                <p><strong>Email:</strong> {captain_email}</p>
                <p><strong>Registration ID:</strong> {registration_id}</p>
            </div>

            <div class="details">
                <h4>Players ({player_count}):</h4>
                <pre>{players}</pre>
            </div>

            <div class="status {status_class}">
                Payment Status: {status_upper}
                {amount_line}
            </div>

            <p>We will contact you soon with further details about the tournament schedule and venue.</p>

            <p>Best regards,<br>
            Western Ghats X Team<br>
            Email: events@westernghatsx.in</p>
        </div>
    </div>
</body>
</html>"#,
        styles = REGISTRANT_STYLES,
        captain_name = team.captain_name,
        team_name = team.team_name,
        captain_phone = team.captain_phone,
        captain_email = team.captain_email,
        registration_id = request.registration_id,
        player_count = team.players.len(),
        players = players_list(&team.players),
        status_class = request.payment_style().css_class(),
        status_upper = request.payment_status.to_uppercase(),
        amount_line = amount_line,
    )
}

/// Internal notification sent to the organizer inbox
pub fn admin_document(request: &RegistrationNotificationRequest) -> String {
    let team = &request.team_data;
    let amount_line = request
        .displayable_amount()
        .map(|amount| {
            format!(
                "<p><strong>Payment Amount:</strong> ₹{}</p>",
                grouped_amount(amount)
            )
        })
        .unwrap_or_default();

    format!(
        r#"
<!DOCTYPE html>
<html>
<head>
    <style>
{styles}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>New Team Registration - Admin Notification</h1>
        </div>

        <div class="content">
            <h3>New team registration received!</h3>

            <div class="details">
                <h4>Team Information:</h4>
                <p><strong>Team Name:</strong> {team_name}</p>
                <p><strong>Captain:</strong> {captain_name}</p>
                <p><strong>Phone:</strong> {captain_phone}</p>
                <p><strong>Email:</strong> {captain_email}</p>
                <p><strong>Registration ID:</strong> {registration_id}</p>
                <p><strong>Payment Status:</strong> {payment_status}</p>
                {amount_line}
            </div>

            <div class="details">
                <h4>Players ({player_count}):</h4>
                <pre>{players}</pre>
            </div>

            <p>Please review and follow up as necessary.</p>
        </div>
    </div>
</body>
</html>"#,
        styles = ADMIN_STYLES,
        team_name = team.team_name,
        captain_name = team.captain_name,
        captain_phone = team.captain_phone,
        captain_email = team.captain_email,
        registration_id = request.registration_id,
        payment_status = request.payment_status,
        amount_line = amount_line,
        player_count = team.players.len(),
        players = players_list(&team.players),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_request;

    #[test]
    fn test_registrant_document_completed_payment() {
        let html = registrant_document(&sample_request());

        assert!(html.contains("<h3>Dear Ravi,</h3>"));
        assert!(html.contains(r#"<div class="status success">"#));
        assert!(html.contains("Payment Status: COMPLETED"));
        assert!(html.contains("Amount: ₹500"));
        assert!(html.contains("<p><strong>Registration ID:</strong> R1</p>"));
        assert!(html.contains("<h4>Players (1):</h4>"));
        assert!(html.contains("<pre>1. A (Age: 10)</pre>"));
    }

    #[test]
    fn test_registrant_document_pending_without_amount() {
        let mut request = sample_request();
        request.payment_status = "awaiting_transfer".to_string();
        request.payment_amount = None;

        let html = registrant_document(&request);

        assert!(html.contains(r#"<div class="status pending">"#));
        assert!(html.contains("Payment Status: AWAITING_TRANSFER"));
        assert!(!html.contains("Amount:"));
    }

    #[test]
    fn test_admin_document_has_raw_status_and_no_greeting() {
        let mut request = sample_request();
        request.payment_amount = Some(12500.0);

        let html = admin_document(&request);

        assert!(html.contains("<p><strong>Payment Status:</strong> completed</p>"));
        assert!(html.contains("<p><strong>Payment Amount:</strong> ₹12,500</p>"));
        assert!(html.contains("New Team Registration - Admin Notification"));
        assert!(!html.contains("Dear "));
        assert!(!html.contains(r#"class="status"#));
    }

    #[test]
    fn test_admin_document_omits_amount_when_absent() {
        let mut request = sample_request();
        request.payment_amount = None;
        assert!(!admin_document(&request).contains("Payment Amount"));
    }
}
