//! Email listing types.

use serde::{Deserialize, Serialize};

/// One email as the backend returns it.
///
/// Read-only on this side: the list is replaced wholesale on every fetch
/// and never mutated locally.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Email {
    /// Subject line, possibly empty.
    pub subject: String,
    /// Sender display string, possibly empty.
    pub sender: String,
    /// Received timestamp, in whatever format the backend produced.
    pub datetime_received: String,
    /// Whether the message has been read.
    pub is_read: bool,
}

/// Response envelope for `GET /api/emails`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailListResponse {
    /// Emails in the requested folder.
    pub emails: Vec<Email>,
}

/// Remote mail folders the backend exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Folder {
    /// Incoming mail.
    #[default]
    Inbox,
    /// Sent mail.
    SentItems,
    /// Archived mail.
    Archive,
    /// Trash.
    DeletedItems,
}

impl Folder {
    /// All folders, in sidebar order.
    pub const ALL: [Self; 4] = [
        Self::Inbox,
        Self::SentItems,
        Self::Archive,
        Self::DeletedItems,
    ];

    /// The folder name as the backend spells it.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::SentItems => "Sent Items",
            Self::Archive => "Archive",
            Self::DeletedItems => "Deleted Items",
        }
    }
}

impl std::fmt::Display for Folder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_names() {
        assert_eq!(Folder::Inbox.name(), "Inbox");
        assert_eq!(Folder::SentItems.name(), "Sent Items");
        assert_eq!(Folder::Archive.name(), "Archive");
        assert_eq!(Folder::DeletedItems.name(), "Deleted Items");
    }

    #[test]
    fn test_folder_display_matches_name() {
        for folder in Folder::ALL {
            assert_eq!(folder.to_string(), folder.name());
        }
    }

    #[test]
    fn test_email_deserializes_backend_keys() {
        let json = r#"{
            "subject": "Weekly report",
            "sender": "boss@example.com",
            "datetime_received": "2024-03-11T09:30:00+03:00",
            "is_read": false
        }"#;
        let email: Email = serde_json::from_str(json).unwrap();
        assert_eq!(email.subject, "Weekly report");
        assert_eq!(email.sender, "boss@example.com");
        assert!(!email.is_read);
    }

    #[test]
    fn test_email_tolerates_missing_fields() {
        let email: Email = serde_json::from_str("{}").unwrap();
        assert!(email.subject.is_empty());
        assert!(email.sender.is_empty());
        assert!(!email.is_read);
    }

    #[test]
    fn test_email_list_envelope() {
        let json = r#"{"emails": [{"subject": "a"}, {"subject": "b"}]}"#;
        let response: EmailListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.emails.len(), 2);
        assert_eq!(response.emails[1].subject, "b");

        let empty: EmailListResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.emails.is_empty());
    }
}
