//! Structured logging for Atlas
//!
//! Logs go to stderr so that stdout stays clean for command output (JSON in
//! particular). `RUST_LOG` wins over the configured level when set.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

/// Global session ID for correlating logs
static SESSION_ID: Lazy<String> = Lazy::new(|| Uuid::new_v4().to_string());

/// Initialize logging with custom configuration
///
/// Fails if a global subscriber is already installed.
pub fn init_with_config(config: &TelemetryConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| anyhow::anyhow!("Invalid log level `{}`: {}", config.log_level, e))?;

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        tracing::subscriber::set_global_default(
            registry.with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(config.show_target),
            ),
        )
    } else {
        tracing::subscriber::set_global_default(
            registry.with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(config.show_target)
                    .compact(),
            ),
        )
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::debug!(
        session_id = %session_id(),
        version = env!("CARGO_PKG_VERSION"),
        "Telemetry initialized"
    );

    Ok(())
}

/// Get the current session ID
pub fn session_id() -> &'static str {
    &SESSION_ID
}

/// Telemetry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Filter directive, e.g. `warn` or `atlas_api_client=debug`
    pub log_level: String,
    /// Emit JSON lines instead of compact text
    pub json: bool,
    /// Include the module target in each line
    pub show_target: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json: false,
            show_target: false,
        }
    }
}

impl TelemetryConfig {
    /// Build from the `[logging]` settings
    pub fn new(log_level: impl Into<String>, json: bool) -> Self {
        Self {
            log_level: log_level.into(),
            json,
            ..Self::default()
        }
    }

    /// Raise the level to `debug` and show targets
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.log_level = "debug".to_string();
            self.show_target = true;
        }
        self
    }
}

/// Measures how long an operation takes and logs it at debug level
pub struct Timer {
    name: String,
    start: Instant,
}

impl Timer {
    /// Start timing `name`
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
        }
    }

    /// Time elapsed so far
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and log the duration
    pub fn stop(self) -> Duration {
        let duration = self.start.elapsed();
        tracing::debug!(
            operation = %self.name,
            duration_ms = duration.as_millis(),
            "Timer completed"
        );
        duration
    }
}
