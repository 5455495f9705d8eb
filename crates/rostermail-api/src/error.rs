//! Error types for backend API operations.

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors produced by API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP-level failure: the request never completed, or the response
    /// body could not be decoded into the expected shape.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server rejected request with status {status}: {detail}")]
    Rejected {
        /// HTTP status code.
        status: reqwest::StatusCode,
        /// Server-provided detail, empty when the body carried none.
        detail: String,
    },

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Classifies this error for callers that branch on the failure mode.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(e) if e.is_decode() => ErrorKind::Decode,
            Self::Http(_) | Self::Url(_) => ErrorKind::Network,
            Self::Rejected { .. } => ErrorKind::Rejection,
        }
    }
}

/// Coarse classification of an [`ApiError`].
///
/// The UI collapses every failure into one generic message per view; the
/// kind survives alongside that message so logging and tests can still
/// tell the failure modes apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never completed (connect, timeout, I/O).
    Network,
    /// The server answered with a non-success status.
    Rejection,
    /// The response arrived but its body was not the expected shape.
    Decode,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_kind() {
        let err = ApiError::Rejected {
            status: reqwest::StatusCode::UNAUTHORIZED,
            detail: "bad credentials".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Rejection);
    }

    #[test]
    fn test_rejected_display_includes_status_and_detail() {
        let err = ApiError::Rejected {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            detail: "boom".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("500"));
        assert!(rendered.contains("boom"));
    }

    #[test]
    fn test_url_error_kind_is_network() {
        let err = ApiError::from(url::ParseError::EmptyHost);
        assert_eq!(err.kind(), ErrorKind::Network);
    }
}
