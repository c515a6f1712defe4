//! Configuration loading and schema definitions
//!
//! Settings come from an optional `atlas.toml`; every field has a default, so
//! an absent or partial file is valid.

mod loader;
mod schema;

pub use loader::{Config, CONFIG_FILE_NAME};
pub use schema::*;
