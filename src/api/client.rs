use std::time::Duration;

use crate::api::error::ApiError;
use crate::api::types::ImageRecord;

/// Base URL of the paginated listing endpoint.
const LIST_ENDPOINT: &str = "https://picsum.photos/v2/list";

/// Request timeout for all fetches.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// HTTP client for the Picsum image service.
///
/// Cheap to clone: the inner reqwest client is reference-counted, so one
/// instance is shared across all in-flight fetch tasks.
#[derive(Debug, Clone)]
pub struct PicsumClient {
    http: reqwest::Client,
    list_endpoint: String,
}

impl PicsumClient {
    pub fn new() -> Self {
        Self::with_list_endpoint(LIST_ENDPOINT)
    }

    /// Build a client against a different listing endpoint.
    pub fn with_list_endpoint(list_endpoint: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("photo-wall/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http,
            list_endpoint: list_endpoint.into(),
        }
    }

    /// Fetch one page of the listing.
    ///
    /// Pages are 1-indexed and fixed-size on the server side. Any non-2xx
    /// status or malformed body is reported as an error; the caller decides
    /// whether to retry.
    pub async fn list_page(&self, page: u32) -> Result<Vec<ImageRecord>, ApiError> {
        let url = format!("{}?page={}", self.list_endpoint, page);
        log::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::from_request(&e))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("listing page {page} returned HTTP {status}");
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read response body: {e}")))?;

        let records: Vec<ImageRecord> =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;

        log::debug!("page {page}: {} records", records.len());
        Ok(records)
    }

    /// Fetch raw image bytes from an arbitrary URL (thumbnail variants and
    /// full-size downloads).
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        log::debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::from_request(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read image bytes: {e}")))?;

        Ok(bytes.to_vec())
    }
}

impl Default for PicsumClient {
    fn default() -> Self {
        Self::new()
    }
}
