//! Country search pipeline for Atlas.
//!
//! This crate provides:
//! - Levenshtein edit distance and normalized similarity
//! - Fuzzy name matching with a similarity threshold
//! - Locale-aware name ordering
//! - Search, region filter and stable sort over country collections
//! - Pagination
//! - Round-tripping list state through URL query parameters
//!
//! Everything here is pure: no I/O, no global state.
//!
//! # Example
//!
//! ```
//! use atlas_search::{filter_and_sort, paginate, sanitize_query_string, Country};
//!
//! let countries: Vec<Country> = serde_json::from_str(r#"[
//!     {"name": {"common": "Germany", "official": "Federal Republic of Germany"},
//!      "population": 83240525, "region": "Europe", "capital": ["Berlin"],
//!      "flags": {"png": "", "svg": ""}, "cca3": "DEU"},
//!     {"name": {"common": "France", "official": "French Republic"},
//!      "population": 67391582, "region": "Europe", "capital": ["Paris"],
//!      "flags": {"png": "", "svg": ""}, "cca3": "FRA"}
//! ]"#).unwrap();
//!
//! let state = sanitize_query_string("?search=jermny");
//! let results = filter_and_sort(&countries, &state.filters);
//! let page = paginate(&results, state.current_page, 12);
//!
//! assert_eq!(page.len(), 1);
//! assert_eq!(page[0].name.common, "Germany");
//! ```

#![warn(missing_docs)]

pub mod collate;
mod error;
mod filter;
mod filters;
mod fuzzy;
mod model;
mod paginate;
mod query;
mod similarity;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{Result, SearchError};
pub use filter::{
    ALL_REGIONS, filter_and_sort, filter_and_sort_with_threshold, filter_by_region,
    filter_by_search, filter_by_search_with_threshold, sort_items,
};
pub use filters::{SearchFilters, SortBy, SortOrder};
pub use fuzzy::{DEFAULT_THRESHOLD, FuzzyMatcher, fuzzy_match, matches};
pub use model::{
    Country, CountryDetail, CountryName, Currency, DetailName, Flags, NativeName, Searchable,
};
pub use paginate::{PageInfo, paginate};
pub use query::{
    DecodedQuery, QueryState, UrlQueryParams, decode, encode, sanitize, sanitize_query_string,
};
pub use similarity::{edit_distance, similarity};

/// Regions used by the REST Countries API.
pub const KNOWN_REGIONS: &[&str] = &["Africa", "Americas", "Antarctic", "Asia", "Europe", "Oceania"];

/// Distinct regions present in `items` with their item counts, in
/// alphabetical order.
pub fn region_counts<T: Searchable>(items: &[T]) -> Vec<(String, usize)> {
    let mut counts = std::collections::BTreeMap::<&str, usize>::new();
    for item in items {
        *counts.entry(item.region()).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(region, count)| (region.to_string(), count))
        .collect()
}
