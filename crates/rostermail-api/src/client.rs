//! HTTP client for the backend REST API.

use reqwest::Client;
use url::Url;

use crate::error::{ApiError, Result};
use crate::types::{
    Email, EmailListResponse, Folder, LoginRequest, LoginResponse, ScheduleItem, ScheduleResponse,
    UpdateScheduleRequest,
};

/// Backend address used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Thin typed client for the backend REST API.
///
/// One method per endpoint, no retries, no caching. Cloning is cheap; the
/// underlying connection pool is shared between clones.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Base URL of the backend.
    base_url: Url,
    /// HTTP client.
    http_client: Client,
}

impl ApiClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid absolute URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            http_client: Client::new(),
        })
    }

    /// The configured backend address.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Posts credentials to `/api/login`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server rejects it, or
    /// the response body cannot be decoded.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let url = self.base_url.join("/api/login")?;
        let response = self.http_client.post(url).json(request).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Fetches the email list for `folder` from `/api/emails`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server rejects it, or
    /// the response body cannot be decoded.
    pub async fn emails(&self, folder: Folder) -> Result<Vec<Email>> {
        let url = self.emails_url(folder)?;
        let response = self.http_client.get(url).send().await?;
        let response = Self::check_status(response).await?;
        let body: EmailListResponse = response.json().await?;
        Ok(body.emails)
    }

    /// Fetches the stored schedule from `/api/schedule`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server rejects it, or
    /// the response body cannot be decoded.
    pub async fn schedule(&self) -> Result<Vec<ScheduleItem>> {
        let url = self.base_url.join("/api/schedule")?;
        let response = self.http_client.get(url).send().await?;
        let response = Self::check_status(response).await?;
        let body: ScheduleResponse = response.json().await?;
        Ok(body.schedule)
    }

    /// Replaces the backend's stored schedule with `items` via
    /// `POST /api/schedule`.
    ///
    /// Full-replace semantics: the backend keeps exactly the supplied
    /// rows, in the supplied order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn update_schedule(&self, items: &[ScheduleItem]) -> Result<()> {
        let url = self.base_url.join("/api/schedule")?;
        let request = UpdateScheduleRequest {
            schedule: items.to_vec(),
        };
        let response = self.http_client.post(url).json(&request).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Builds the `/api/emails` URL with the folder query parameter.
    fn emails_url(&self, folder: Folder) -> Result<Url> {
        let mut url = self.base_url.join("/api/emails")?;
        url.query_pairs_mut()
            .append_pair("folder_name", folder.name());
        Ok(url)
    }

    /// Maps a non-success response to [`ApiError::Rejected`], passing
    /// success responses through untouched.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body).map_or(body, |parsed| parsed.detail);
        Err(ApiError::Rejected { status, detail })
    }
}

/// Error body shape the backend uses for rejections.
#[derive(serde::Deserialize)]
struct ErrorBody {
    /// Human-readable rejection reason.
    #[serde(default)]
    detail: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_client_rejects_invalid_base_url() {
        let err = ApiClient::new("not a url").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Network);
    }

    #[test]
    fn test_emails_url_encodes_folder_name() {
        let client = ApiClient::new(DEFAULT_BASE_URL).unwrap();
        let url = client.emails_url(Folder::SentItems).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/emails?folder_name=Sent+Items"
        );
    }

    #[test]
    fn test_emails_url_default_folder() {
        let client = ApiClient::new(DEFAULT_BASE_URL).unwrap();
        let url = client.emails_url(Folder::default()).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/emails?folder_name=Inbox"
        );
    }

    #[test]
    fn test_base_url_with_trailing_path_still_targets_api_root() {
        let client = ApiClient::new("http://localhost:8000/ignored").unwrap();
        let url = client.emails_url(Folder::Inbox).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/emails?folder_name=Inbox"
        );
    }
}
