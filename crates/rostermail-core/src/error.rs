//! Failure representation shared by the view state machines.

use rostermail_api::{ApiError, ErrorKind};

/// A failed backend call, reduced to what the views keep.
///
/// [`ApiError`] is not `Clone`, so the machines store this projection
/// instead: the coarse classification plus the rendered error chain. The
/// UI shows its own generic message per view; `message` feeds logging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LoadError {
    /// What went wrong, coarsely.
    pub kind: ErrorKind,
    /// Rendered error chain. Not shown verbatim in the UI.
    pub message: String,
}

impl LoadError {
    /// Creates a load error from a classification and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<ApiError> for LoadError {
    fn from(err: ApiError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_display_is_message() {
        let err = LoadError::new(ErrorKind::Network, "connection refused");
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_load_error_from_api_error_keeps_kind() {
        let api_err = ApiError::Rejected {
            status: reqwest::StatusCode::BAD_GATEWAY,
            detail: "upstream down".to_string(),
        };
        let err = LoadError::from(api_err);
        assert_eq!(err.kind, ErrorKind::Rejection);
        assert!(err.message.contains("502"));
    }
}
