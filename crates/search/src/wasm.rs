//! WASM bindings for the search pipeline.
//!
//! Collections and state cross the boundary as JSON strings. Malformed
//! input yields `[]` or `null` instead of throwing.

use crate::{Country, PageInfo, QueryState, SearchFilters};
use wasm_bindgen::prelude::*;

/// Filter and sort a JSON array of countries.
///
/// # Arguments
/// * `countries_json` - JSON array of REST Countries objects
/// * `filters_json` - JSON object with `searchQuery`, `selectedRegion`,
///   `sortBy`, `sortOrder` (missing fields take defaults)
///
/// # Returns
/// JSON array of the matching countries in display order
#[wasm_bindgen]
pub fn filter_and_sort_countries(countries_json: &str, filters_json: &str) -> String {
    let Ok(countries) = serde_json::from_str::<Vec<Country>>(countries_json) else {
        return "[]".to_string();
    };
    let filters: SearchFilters = serde_json::from_str(filters_json).unwrap_or_default();

    let sorted = crate::filter_and_sort(&countries, &filters);
    serde_json::to_string(&sorted).unwrap_or_else(|_| "[]".to_string())
}

/// Slice one page out of a JSON array of countries.
///
/// # Returns
/// JSON object `{ "items": [...], "pagination": {...} }`, or `null` for
/// malformed input
#[wasm_bindgen]
pub fn paginate_countries(countries_json: &str, current_page: usize, items_per_page: usize) -> String {
    let Ok(countries) = serde_json::from_str::<Vec<Country>>(countries_json) else {
        return "null".to_string();
    };

    let page = crate::paginate(&countries, current_page, items_per_page);
    let info = PageInfo::new(countries.len(), items_per_page, current_page);

    serde_json::json!({ "items": page, "pagination": info }).to_string()
}

/// Encode filters and page as a shareable query string (no leading `?`).
#[wasm_bindgen]
pub fn encode_query(filters_json: &str, current_page: usize) -> String {
    let filters: SearchFilters = serde_json::from_str(filters_json).unwrap_or_default();
    crate::encode(&filters, current_page).to_query_string()
}

/// Sanitize an address-bar query string into list state.
///
/// # Returns
/// JSON object `{ "filters": {...}, "currentPage": n }`
#[wasm_bindgen]
pub fn sanitize_query(query: &str) -> String {
    let state: QueryState = crate::sanitize_query_string(query);
    serde_json::to_string(&state).unwrap_or_else(|_| "null".to_string())
}

/// Normalized edit-distance similarity in `[0, 1]`.
#[wasm_bindgen]
pub fn string_similarity(a: &str, b: &str) -> f64 {
    crate::similarity(a, b)
}

/// Check whether `query` fuzzily matches `target` at `threshold`.
#[wasm_bindgen]
pub fn fuzzy_matches(query: &str, target: &str, threshold: f64) -> bool {
    crate::matches(query, target, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTRIES: &str = r#"[
        {"name": {"common": "Germany", "official": "Federal Republic of Germany"},
         "population": 83240525, "region": "Europe", "capital": ["Berlin"],
         "flags": {"png": "", "svg": ""}, "cca3": "DEU"},
        {"name": {"common": "Chile", "official": "Republic of Chile"},
         "population": 19116209, "region": "Americas", "capital": ["Santiago"],
         "flags": {"png": "", "svg": ""}, "cca3": "CHL"}
    ]"#;

    #[test]
    fn test_malformed_countries_yield_empty_array() {
        assert_eq!(filter_and_sort_countries("{bad", "{}"), "[]");
        assert_eq!(filter_and_sort_countries("{}", "{}"), "[]");
    }

    #[test]
    fn test_malformed_countries_yield_null_page() {
        assert_eq!(paginate_countries("x", 1, 12), "null");
    }

    #[test]
    fn test_malformed_filters_encode_defaults() {
        assert_eq!(encode_query("garbage", 1), "");
        assert_eq!(encode_query("garbage", 3), "page=3");
    }

    #[test]
    fn test_malformed_filters_fall_back_to_defaults() {
        let sorted: serde_json::Value =
            serde_json::from_str(&filter_and_sort_countries(COUNTRIES, "not json")).unwrap();
        let names: Vec<&str> = sorted
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"]["common"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Chile", "Germany"]);
    }

    #[test]
    fn test_paginate_valid_input() {
        let page: serde_json::Value =
            serde_json::from_str(&paginate_countries(COUNTRIES, 2, 1)).unwrap();
        assert_eq!(page["items"].as_array().unwrap().len(), 1);
        assert_eq!(page["pagination"]["totalPages"], 2);
    }
}
