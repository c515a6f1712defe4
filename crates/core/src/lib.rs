//! Core utilities for Atlas
//!
//! This crate provides shared functionality used by the HTTP client and the
//! command-line tool:
//!
//! - **Error handling**: Errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//! - **Retry policy**: Exponential backoff settings for flaky network calls
//!
//! # Example
//!
//! ```rust,no_run
//! use atlas_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! println!("Listing {} countries per page", config.schema.browse.items_per_page);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod retry;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::retry::RetryConfig;
}
