//! HTTP client for the TakaTrack backend API.
//!
//! All pages talk to the backend through this one client so that auth
//! headers, timeouts, and error mapping stay consistent.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use takatrack_core::errors::ApiError;
use takatrack_core::{Error, Result};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default base URL for the TakaTrack backend.
pub const DEFAULT_API_URL: &str = "https://api.takatrack.app";

/// Error body shape the backend uses for non-2xx responses.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the TakaTrack backend.
///
/// # Example
///
/// ```ignore
/// let client = ApiClient::new("https://api.takatrack.app", "your-token")?;
/// let incomes = client.get_incomes().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    pub(crate) base_url: String,
    auth_header: HeaderValue,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the access token is not a valid header value or
    /// the HTTP client cannot be initialized.
    pub fn new(base_url: &str, access_token: &str) -> Result<Self> {
        let auth_header = HeaderValue::from_str(&format!("Bearer {}", access_token))
            .map_err(|e| Error::Unexpected(format!("Invalid access token format: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    /// Default headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, self.auth_header.clone());
        headers
    }

    /// Make a GET request and parse the response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[Api] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.parse_response(response).await
    }

    /// Make a POST request with a JSON body and parse the response.
    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[Api] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.parse_response(response).await
    }

    /// Make a bodyless PUT request and discard the response payload.
    pub(crate) async fn put_empty(&self, path: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[Api] PUT {}", url);

        let response = self
            .client
            .put(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.check_status(response).await
    }

    /// Make a bodyless POST request and discard the response payload.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[Api] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.check_status(response).await
    }

    /// Make a DELETE request and discard the response payload.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[Api] DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.check_status(response).await
    }

    /// Parse an HTTP response into the expected type.
    async fn parse_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Self::status_error(status, &body).into());
        }

        serde_json::from_str(&body).map_err(|e| {
            ApiError::Decode(format!(
                "{} - {}",
                e,
                body.chars().take(200).collect::<String>()
            ))
            .into()
        })
    }

    /// Check an HTTP response status, ignoring any success payload.
    async fn check_status(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(Self::status_error(status, &body).into())
    }

    /// Map a non-success status and body to the API error taxonomy.
    fn status_error(status: reqwest::StatusCode, body: &str) -> ApiError {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return ApiError::SessionExpired;
        }

        let decoded = serde_json::from_str::<ApiErrorResponse>(body)
            .ok()
            .and_then(|err| err.message.or(err.error).or(err.code));
        let message = match decoded {
            Some(msg) => msg,
            None if body.trim().is_empty() => format!("HTTP {}", status),
            None => body.chars().take(200).collect(),
        };

        ApiError::Http {
            status: status.as_u16(),
            message,
        }
    }
}
