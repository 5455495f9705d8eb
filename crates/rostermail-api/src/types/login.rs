//! Login types.

use serde::{Deserialize, Serialize};

/// Credentials and endpoint posted to `/api/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
    /// Mailbox address.
    pub email: String,
    /// EWS service endpoint the backend should connect to.
    pub ews_url: String,
}

/// Backend's answer to a login attempt.
///
/// The contract only promises "a result payload", so unknown fields are
/// ignored and a missing `success` key on a 2xx response counts as
/// accepted (rejections arrive as error statuses).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    /// Whether the credentials were accepted.
    pub success: bool,
    /// Optional human-readable status.
    pub message: Option<String>,
}

impl Default for LoginResponse {
    fn default() -> Self {
        Self {
            success: true,
            message: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_snake_case() {
        let request = LoginRequest {
            username: "jdoe".to_string(),
            password: "hunter2".to_string(),
            email: "jdoe@example.com".to_string(),
            ews_url: "https://mail.example.com/EWS/Exchange.asmx".to_string(),
        };
        let value = serde_json::to_value(request).unwrap();
        assert_eq!(value["username"], "jdoe");
        assert_eq!(value["password"], "hunter2");
        assert_eq!(value["email"], "jdoe@example.com");
        assert_eq!(value["ews_url"], "https://mail.example.com/EWS/Exchange.asmx");
    }

    #[test]
    fn test_response_defaults_to_accepted() {
        let response: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(response.success);
        assert!(response.message.is_none());
    }

    #[test]
    fn test_response_explicit_failure() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"success": false, "message": "bad credentials"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("bad credentials"));
    }

    #[test]
    fn test_response_ignores_unknown_fields() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"success": true, "token": "abc", "expires": 3600}"#).unwrap();
        assert!(response.success);
    }
}
