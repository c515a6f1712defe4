//! Error types for the API client

use atlas_core::{Error as CoreError, ErrorCode};
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The API has nothing at this address (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
    },

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is retryable
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            // Connection errors and timeouts
            Self::Request(e) => e.is_connect() || e.is_timeout(),
            // 5xx errors and 429 (rate limited)
            Self::ApiResponse { status, .. } => *status >= 500 || *status == 429,
            Self::Json(_) | Self::Config(_) | Self::NotFound(_) | Self::InvalidUrl(_) => false,
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::NotFound(_))
            || matches!(self, Self::ApiResponse { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if *status >= 500)
    }
}

impl From<ApiError> for CoreError {
    fn from(err: ApiError) -> Self {
        let code = match &err {
            ApiError::Request(e) if e.is_timeout() => ErrorCode::Timeout,
            ApiError::Request(e) if e.is_decode() => ErrorCode::InvalidResponse,
            ApiError::Request(_) => ErrorCode::NetworkError,
            ApiError::Json(_) => ErrorCode::InvalidResponse,
            ApiError::Config(_) | ApiError::InvalidUrl(_) => ErrorCode::ConfigError,
            ApiError::NotFound(_) => ErrorCode::CountryNotFound,
            ApiError::ApiResponse { .. } => ErrorCode::HttpStatus,
        };

        let suggestion = match code {
            ErrorCode::Timeout | ErrorCode::NetworkError | ErrorCode::HttpStatus => {
                Some("Check your connection or use --input with a local JSON file")
            }
            ErrorCode::ConfigError => Some("Check [api] base_url in atlas.toml or ATLAS_API_URL"),
            _ => None,
        };

        let core = CoreError::new(code, err.to_string()).with_source(err);
        match suggestion {
            Some(s) => core.with_suggestion(s),
            None => core,
        }
    }
}
