//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::CountriesApi;
use crate::error::{ApiError, ApiResult};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// REST Countries client with retry and request correlation
///
/// This client wraps `reqwest` and adds:
/// - Automatic retry with exponential backoff for transient failures
/// - Request correlation IDs for tracing
/// - Mapping of HTTP statuses to [`ApiError`]
#[derive(Clone)]
pub struct CountriesClient {
    inner: Client,
    config: Arc<ClientConfig>,
    base: Arc<Url>,
}

impl CountriesClient {
    /// Create a new client with default configuration plus environment overrides
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;
        let base = config.base()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("atlas/", env!("CARGO_PKG_VERSION"))),
        );

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            base: Arc::new(base),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Access the country endpoints
    #[must_use]
    pub fn countries(&self) -> CountriesApi {
        CountriesApi::new(self.clone())
    }

    /// Build an endpoint URL by appending path segments to the base URL.
    ///
    /// Segments are percent-encoded, so names with spaces or slashes are safe.
    pub fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = (*self.base).clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(self.config.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Perform a GET request with retry
    #[instrument(skip(self, url), fields(url = %url))]
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        let request_id = Uuid::new_v4().to_string();
        self.execute_with_retry(&request_id, &url).await
    }

    /// Execute request with retry logic
    async fn execute_with_retry<T: DeserializeOwned>(
        &self,
        request_id: &str,
        url: &Url,
    ) -> ApiResult<T> {
        let retry_config = &self.config.retry;
        let max_attempts = retry_config.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            // Wait before retry (except first attempt)
            if attempt > 0 {
                let delay = retry_config.delay_for_attempt(attempt);
                debug!(
                    request_id = %request_id,
                    attempt = attempt,
                    delay_ms = delay.as_millis(),
                    "Retrying after delay"
                );
                tokio::time::sleep(delay).await;
            }

            let start = Instant::now();
            let result = self.execute_single_request(request_id, url).await;
            let elapsed = start.elapsed();
            attempt += 1;

            match result {
                Ok(value) => {
                    debug!(
                        request_id = %request_id,
                        attempt = attempt,
                        elapsed_ms = elapsed.as_millis(),
                        "Request succeeded"
                    );
                    return Ok(value);
                }
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    warn!(
                        request_id = %request_id,
                        attempt = attempt,
                        error = %e,
                        "Request failed, will retry"
                    );
                }
                Err(e) => {
                    debug!(
                        request_id = %request_id,
                        attempt = attempt,
                        error = %e,
                        "Request failed, not retrying"
                    );
                    return Err(e);
                }
            }
        }
    }

    /// Execute a single request without retry
    async fn execute_single_request<T: DeserializeOwned>(
        &self,
        request_id: &str,
        url: &Url,
    ) -> ApiResult<T> {
        let response = self
            .inner
            .get(url.clone())
            .header(X_REQUEST_ID, request_id)
            .send()
            .await?;

        handle_response(response).await
    }
}

/// Map the HTTP status and deserialize the body
async fn handle_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();

    if status.is_success() {
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    } else if status == StatusCode::NOT_FOUND {
        Err(ApiError::NotFound(response.url().path().to_string()))
    } else {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ApiError::api_response(status.as_u16(), message))
    }
}
