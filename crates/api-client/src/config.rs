//! Configuration for the countries API client
//!
//! Starts from `atlas.toml` settings (or defaults) and lets environment
//! variables override them.

use crate::error::{ApiError, ApiResult};
use atlas_core::config::{ApiSettings, DEFAULT_BASE_URL};
use atlas_core::retry::RetryConfig;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Overrides the base URL
pub const ENV_API_URL: &str = "ATLAS_API_URL";
/// Overrides the request timeout, in seconds
pub const ENV_TIMEOUT_SECS: &str = "ATLAS_TIMEOUT_SECS";
/// Selects the environment (and with it the retry preset)
pub const ENV_ENVIRONMENT: &str = "ATLAS_ENV";

/// Environment types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development, typically against a mock server
    Development,
    /// The public REST Countries service
    #[default]
    Production,
}

impl Environment {
    /// Parse an environment name; anything unrecognized is production
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" | "local" => Self::Development,
            _ => Self::Production,
        }
    }

    /// Read `ATLAS_ENV`
    #[must_use]
    pub fn from_env() -> Self {
        Self::parse(&env::var(ENV_ENVIRONMENT).unwrap_or_default())
    }

    /// Retry preset for this environment
    #[must_use]
    pub fn retry_preset(self) -> RetryConfig {
        match self {
            Self::Development => RetryConfig::quick(),
            Self::Production => RetryConfig::default(),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the v3.1 API, without a trailing resource path
    pub base_url: String,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// Retry configuration
    pub retry: RetryConfig,
    /// Current environment
    pub environment: Environment,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            retry: RetryConfig::default(),
            environment: Environment::default(),
        }
    }
}

impl ClientConfig {
    /// Create configuration from the `[api]` section of `atlas.toml`
    #[must_use]
    pub fn from_settings(settings: &ApiSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            timeout: Duration::from_secs(settings.timeout_secs),
            ..Self::default()
        }
    }

    /// Create configuration from defaults plus environment variables
    ///
    /// Reads the following environment variables:
    /// - `ATLAS_API_URL`: base URL
    /// - `ATLAS_TIMEOUT_SECS`: request timeout in seconds
    /// - `ATLAS_ENV`: environment (development/production)
    pub fn from_env() -> ApiResult<Self> {
        let config = Self::default().with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply `ATLAS_*` environment overrides on top of this configuration
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS).and_then(|s| s.trim().parse().ok()) {
            self.timeout = Duration::from_secs(secs);
        }

        if let Some(name) = lookup(ENV_ENVIRONMENT) {
            self.environment = Environment::parse(&name);
            self.retry = self.environment.retry_preset();
        }

        self
    }

    /// Create development configuration (local mock server)
    #[must_use]
    pub fn development() -> Self {
        Self {
            base_url: "http://localhost:8080/v3.1".to_string(),
            timeout: Duration::from_secs(10),
            retry: RetryConfig::quick(),
            environment: Environment::Development,
        }
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder-style method to set retry config
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Parsed base URL
    pub fn base(&self) -> ApiResult<Url> {
        Url::parse(&self.base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", self.base_url)))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }

        if self.base()?.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(self.base_url.clone()));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}
