use thiserror::Error;

/// Errors produced by the Picsum API client.
///
/// Every variant is `Clone` because fetch results travel inside application
/// messages. The underlying reqwest errors are flattened to strings for the
/// same reason.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// A network-level error (DNS failure, connection refused, broken pipe).
    #[error("network error: {0}")]
    Network(String),

    /// The request exceeded the client timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The server answered with a non-success status code.
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body could not be decoded (malformed JSON or image data).
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a reqwest error into `Timeout` or `Network`.
    pub fn from_request(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
