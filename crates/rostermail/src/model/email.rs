//! Display adapters for backend emails.

use chrono::{DateTime, Local};
use rostermail_api::Email;

/// Sender for display; the backend may leave the field blank.
#[must_use]
pub fn sender_display(email: &Email) -> &str {
    if email.sender.is_empty() {
        "Unknown Sender"
    } else {
        &email.sender
    }
}

/// Subject for display; the backend may leave the field blank.
#[must_use]
pub fn subject_display(email: &Email) -> &str {
    if email.subject.is_empty() {
        "No Subject"
    } else {
        &email.subject
    }
}

/// Formats a received timestamp to local time.
///
/// Converts stamps like "2025-03-04T13:20:00Z" to the local timezone and
/// formats as "Mar 04, 2025 13:20".
#[must_use]
pub fn format_received(raw: &str) -> String {
    // The backend sends RFC 3339; try that first
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        let local: DateTime<Local> = dt.with_timezone(&Local);
        return local.format("%b %d, %Y %H:%M").to_string();
    }

    // Some EWS gateways relay RFC 2822 stamps unchanged
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        let local: DateTime<Local> = dt.with_timezone(&Local);
        return local.format("%b %d, %Y %H:%M").to_string();
    }

    // If all parsing fails, show the original string
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_sender_and_subject_get_fallbacks() {
        let email = Email::default();
        assert_eq!(sender_display(&email), "Unknown Sender");
        assert_eq!(subject_display(&email), "No Subject");

        let email = Email {
            sender: "hr@sfda.gov.sa".to_string(),
            subject: "Shift swap".to_string(),
            ..Email::default()
        };
        assert_eq!(sender_display(&email), "hr@sfda.gov.sa");
        assert_eq!(subject_display(&email), "Shift swap");
    }

    #[test]
    fn rfc3339_stamp_is_reformatted() {
        // Mid-year noon UTC stays in the same year in every timezone
        let formatted = format_received("2025-06-15T12:00:00Z");
        assert!(formatted.contains("2025"));
        assert!(formatted.contains("Jun"));
        assert!(!formatted.contains('T'));
    }

    #[test]
    fn rfc2822_stamp_is_reformatted() {
        let formatted = format_received("Sun, 15 Jun 2025 12:00:00 +0000");
        assert!(formatted.contains("2025"));
        assert!(formatted.contains("Jun"));
    }

    #[test]
    fn unparseable_stamp_passes_through() {
        assert_eq!(format_received("yesterday-ish"), "yesterday-ish");
        assert_eq!(format_received(""), "");
    }
}
