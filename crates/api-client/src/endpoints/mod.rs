//! Endpoint-specific API implementations
//!
//! | Module | Endpoint | Description |
//! |--------|----------|-------------|
//! | `countries` | `/all`, `/name/{name}`, `/alpha` | Country listing, lookup and code resolution |

pub mod countries;

pub use countries::CountriesApi;
