//! REST Countries API client for Atlas
//!
//! This crate provides a resilient HTTP client for the public
//! [REST Countries](https://restcountries.com) v3.1 API.
//!
//! # Features
//!
//! - **Environment-based configuration**: `atlas.toml` settings with `ATLAS_*` overrides
//! - **Retry with exponential backoff**: Automatic retry for transient failures
//! - **Request correlation**: Track requests with unique IDs for debugging
//! - **Typed endpoints**: Responses deserialize into `atlas-search` models
//!
//! # Example
//!
//! ```rust,no_run
//! use atlas_api_client::{CountriesClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CountriesClient::new()?;
//!
//!     let countries = client.countries().all().await?;
//!     println!("Fetched {} countries", countries.len());
//!
//!     if let Some(detail) = client.countries().by_name("Germany").await? {
//!         let borders = client.countries().by_codes(&detail.borders).await?;
//!         println!("{} has {} neighbours", detail.name.common, borders.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::CountriesClient;
pub use config::{ClientConfig, Environment};
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::CountriesClient;
    pub use crate::config::{ClientConfig, Environment};
    pub use crate::endpoints::CountriesApi;
    pub use crate::error::{ApiError, ApiResult};
}
