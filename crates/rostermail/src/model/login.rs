//! Login form state model.

use std::collections::HashMap;

use rostermail_api::LoginRequest;

/// State for the login form.
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
    /// Mailbox address.
    pub email: String,
    /// Exchange Web Services endpoint URL.
    pub ews_url: String,
    /// Validation errors by field name.
    pub errors: HashMap<String, String>,
    /// Error from the login request.
    pub submit_error: Option<String>,
    /// Whether a login request is in flight.
    pub is_submitting: bool,
}

impl LoginState {
    /// Create a new empty login state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the form and return whether it may be submitted.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        if self.username.trim().is_empty() {
            self.errors
                .insert("username".to_string(), "Username is required".to_string());
        }

        if self.password.is_empty() {
            self.errors
                .insert("password".to_string(), "Password is required".to_string());
        }

        if self.email.trim().is_empty() {
            self.errors
                .insert("email".to_string(), "Email is required".to_string());
        } else if !self.email.contains('@') {
            self.errors
                .insert("email".to_string(), "Invalid email format".to_string());
        }

        if self.ews_url.trim().is_empty() {
            self.errors
                .insert("ews_url".to_string(), "EWS URL is required".to_string());
        } else {
            match url::Url::parse(self.ews_url.trim()) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                _ => {
                    self.errors.insert(
                        "ews_url".to_string(),
                        "EWS URL must be an absolute http(s) URL".to_string(),
                    );
                }
            }
        }

        self.errors.is_empty()
    }

    /// Convert the form fields into a login request.
    #[must_use]
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
            email: self.email.clone(),
            ews_url: self.ews_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LoginState {
        LoginState {
            username: "nalqahtani".to_string(),
            password: "secret".to_string(),
            email: "nalqahtani@sfda.gov.sa".to_string(),
            ews_url: "https://mail.sfda.gov.sa/EWS/Exchange.asmx".to_string(),
            ..LoginState::new()
        }
    }

    #[test]
    fn complete_form_validates() {
        let mut state = filled();
        assert!(state.validate());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn every_field_is_required() {
        let mut state = LoginState::new();
        assert!(!state.validate());
        assert!(state.errors.contains_key("username"));
        assert!(state.errors.contains_key("password"));
        assert!(state.errors.contains_key("email"));
        assert!(state.errors.contains_key("ews_url"));
    }

    #[test]
    fn email_must_contain_at_sign() {
        let mut state = filled();
        state.email = "not-an-address".to_string();
        assert!(!state.validate());
        assert_eq!(
            state.errors.get("email").map(String::as_str),
            Some("Invalid email format")
        );
    }

    #[test]
    fn ews_url_must_be_absolute_http() {
        let mut state = filled();
        state.ews_url = "mail.sfda.gov.sa/EWS".to_string();
        assert!(!state.validate());
        assert!(state.errors.contains_key("ews_url"));

        state.ews_url = "ftp://mail.sfda.gov.sa/EWS".to_string();
        assert!(!state.validate());
        assert!(state.errors.contains_key("ews_url"));

        state.ews_url = "http://mail.sfda.gov.sa/EWS".to_string();
        assert!(state.validate());
    }

    #[test]
    fn revalidation_clears_stale_errors() {
        let mut state = filled();
        state.email = "broken".to_string();
        assert!(!state.validate());
        assert!(state.errors.contains_key("email"));

        state.email = "fixed@sfda.gov.sa".to_string();
        assert!(state.validate());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn request_carries_all_four_fields() {
        let request = filled().to_request();
        assert_eq!(request.username, "nalqahtani");
        assert_eq!(request.password, "secret");
        assert_eq!(request.email, "nalqahtani@sfda.gov.sa");
        assert_eq!(request.ews_url, "https://mail.sfda.gov.sa/EWS/Exchange.asmx");
    }
}
