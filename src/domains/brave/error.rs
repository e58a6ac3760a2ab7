//! Brave Search API error types.

use thiserror::Error;

/// Result type for Brave Search API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while talking to the Brave Search API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No API key was configured by any source.
    #[error("Brave API key is not configured (set BRAVE_API_KEY or --brave-api-key)")]
    MissingApiKey,

    /// The HTTP request could not be sent or the body could not be read.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Brave Search API error: {status} - {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request parameters could not be encoded as a query string.
    #[error("Failed to encode query parameters: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

impl ApiError {
    /// Create a status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Whether the upstream rejected the credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}
