//! Configuration schema definitions

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// `[api]` table
    #[serde(default)]
    pub api: ApiSettings,

    /// `[browse]` table
    #[serde(default)]
    pub browse: BrowseSettings,

    /// `[logging]` table
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl ConfigSchema {
    /// Reject values the rest of the tool cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(Error::config_invalid("api.base_url", "must not be empty"));
        }
        if !(self.api.base_url.starts_with("http://") || self.api.base_url.starts_with("https://")) {
            return Err(Error::config_invalid(
                "api.base_url",
                format!("`{}` is not an http(s) URL", self.api.base_url),
            ));
        }
        if self.api.timeout_secs == 0 {
            return Err(Error::config_invalid("api.timeout_secs", "must be at least 1"));
        }
        if self.browse.items_per_page == 0 {
            return Err(Error::config_invalid("browse.items_per_page", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.browse.fuzzy_threshold) {
            return Err(Error::config_invalid(
                "browse.fuzzy_threshold",
                format!("{} is outside 0.0..=1.0", self.browse.fuzzy_threshold),
            ));
        }
        Ok(())
    }
}

/// Remote countries API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the REST Countries v3.1 API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Default REST Countries endpoint
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Listing and search settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowseSettings {
    /// Cards shown per page
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,

    /// Minimum similarity for a fuzzy name match
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            fuzzy_threshold: default_fuzzy_threshold(),
        }
    }
}

fn default_items_per_page() -> usize {
    12
}

fn default_fuzzy_threshold() -> f64 {
    0.6
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
