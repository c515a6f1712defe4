//! Property-based tests for the search pipeline
//!
//! These tests check the invariants of the scorer, matcher, filters,
//! paginator and query codec across generated inputs.

use atlas_search::*;
use proptest::prelude::*;

fn country(common: String, population: u64, region: String) -> Country {
    Country {
        name: CountryName {
            official: format!("Republic of {common}"),
            common,
        },
        population,
        region,
        capital: Vec::new(),
        flags: Flags::default(),
        cca3: "XXX".to_string(),
    }
}

fn arb_country() -> impl Strategy<Value = Country> {
    (
        "[A-Za-zÅÉçö ]{0,12}",
        0u64..1_000,
        prop::sample::select(KNOWN_REGIONS.to_vec()),
    )
        .prop_map(|(name, population, region)| country(name, population, region.to_string()))
}

fn arb_filters() -> impl Strategy<Value = SearchFilters> {
    (
        "[a-z &=?%+]{0,10}",
        prop::sample::select(vec!["", "Africa", "Europe", "Oceania"]),
        prop::sample::select(vec![SortBy::Name, SortBy::Population]),
        prop::sample::select(vec![SortOrder::Asc, SortOrder::Desc]),
    )
        .prop_map(|(search_query, region, sort_by, sort_order)| SearchFilters {
            search_query,
            selected_region: region.to_string(),
            sort_by,
            sort_order,
        })
}

// ============================================================================
// Similarity Scorer
// ============================================================================

proptest! {
    /// A string is maximally similar to itself
    #[test]
    fn test_similarity_reflexive(s in ".{0,20}") {
        prop_assert_eq!(similarity(&s, &s), 1.0);
    }

    /// Similarity does not depend on argument order
    #[test]
    fn test_similarity_symmetric(a in ".{0,15}", b in ".{0,15}") {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    /// Similarity stays within [0, 1]
    #[test]
    fn test_similarity_bounded(a in ".{0,15}", b in ".{0,15}") {
        let score = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    /// Edit distance never exceeds the longer length
    #[test]
    fn test_edit_distance_bounded(a in ".{0,15}", b in ".{0,15}") {
        let longest = a.chars().count().max(b.chars().count());
        prop_assert!(edit_distance(&a, &b) <= longest);
    }
}

// ============================================================================
// Fuzzy Matcher
// ============================================================================

proptest! {
    /// Any substring of the lowercased target matches
    #[test]
    fn test_substring_always_matches(
        target in "[A-Za-z ]{1,20}",
        start in 0usize..20,
        len in 0usize..20,
    ) {
        let lower = target.to_lowercase();
        let start = start.min(lower.len());
        let end = (start + len).min(lower.len());
        let query = lower[start..end].to_uppercase();

        prop_assert!(matches(&query, &target, 1.0));
    }
}

// ============================================================================
// Filter/Sort Engine
// ============================================================================

proptest! {
    /// A blank query leaves the collection untouched
    #[test]
    fn test_blank_search_identity(
        countries in prop::collection::vec(arb_country(), 0..20),
        blank in "[ \t]{0,4}",
    ) {
        let result = filter_by_search(countries.clone(), &blank);
        prop_assert_eq!(result, countries);
    }

    /// Search and region filters only ever drop items, never reorder them
    #[test]
    fn test_filters_preserve_relative_order(
        countries in prop::collection::vec(arb_country(), 0..20),
        query in "[a-z]{0,4}",
        region in prop::sample::select(KNOWN_REGIONS.to_vec()),
    ) {
        let indexed: Vec<(usize, &Country)> = countries.iter().enumerate().collect();
        let searched = filter_by_search(countries.iter().collect(), &query);
        let filtered = filter_by_region(searched, region);

        let positions: Vec<usize> = filtered
            .iter()
            .map(|kept| indexed.iter().find(|(_, c)| std::ptr::eq(*c, *kept)).map(|(i, _)| *i).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Population sort orders keys and keeps equal keys in input order
    #[test]
    fn test_population_sort_stable(
        countries in prop::collection::vec(arb_country(), 0..30),
        order in prop::sample::select(vec![SortOrder::Asc, SortOrder::Desc]),
    ) {
        let indexed: Vec<(usize, &Country)> = countries.iter().enumerate().collect();
        let sorted = sort_items(indexed.clone().into_iter().map(|(_, c)| c).collect::<Vec<_>>(), SortBy::Population, order);

        let positions: Vec<usize> = sorted
            .iter()
            .map(|kept| indexed.iter().find(|(_, c)| std::ptr::eq(*c, *kept)).map(|(i, _)| *i).unwrap())
            .collect();

        for pair in positions.windows(2) {
            let (a, b) = (&countries[pair[0]], &countries[pair[1]]);
            match order {
                SortOrder::Asc => prop_assert!(a.population <= b.population),
                SortOrder::Desc => prop_assert!(a.population >= b.population),
            }
            if a.population == b.population {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }

    /// The pipeline output is a permutation of a subset of its input
    #[test]
    fn test_filter_and_sort_subset(
        countries in prop::collection::vec(arb_country(), 0..20),
        filters in arb_filters(),
    ) {
        let result = filter_and_sort(&countries, &filters);
        prop_assert!(result.len() <= countries.len());
        for kept in &result {
            prop_assert!(countries.iter().any(|c| std::ptr::eq(c, *kept)));
        }
    }
}

// ============================================================================
// Paginator
// ============================================================================

proptest! {
    /// A page never holds more than the page size
    #[test]
    fn test_page_size_bound(len in 0usize..200, page in 1usize..30, per_page in 1usize..40) {
        let items: Vec<usize> = (0..len).collect();
        prop_assert!(paginate(&items, page, per_page).len() <= per_page);
    }

    /// Pages past the last one are empty
    #[test]
    fn test_past_last_page_empty(len in 0usize..200, per_page in 1usize..40, beyond in 1usize..10) {
        let items: Vec<usize> = (0..len).collect();
        let info = PageInfo::new(len, per_page, 1);
        prop_assert!(paginate(&items, info.total_pages + beyond, per_page).is_empty());
    }

    /// Concatenating every page reproduces the collection
    #[test]
    fn test_pages_cover_collection(len in 0usize..200, per_page in 1usize..40) {
        let items: Vec<usize> = (0..len).collect();
        let info = PageInfo::new(len, per_page, 1);
        let joined: Vec<usize> = (1..=info.total_pages)
            .flat_map(|page| paginate(&items, page, per_page).to_vec())
            .collect();
        prop_assert_eq!(joined, items);
    }
}

// ============================================================================
// Query Codec
// ============================================================================

proptest! {
    /// sanitize(encode(f, p)) == (f, p) for valid state
    #[test]
    fn test_codec_round_trip(filters in arb_filters(), page in 1usize..=usize::MAX) {
        let params = encode(&filters, page);
        let state = sanitize(&params);
        prop_assert_eq!(state.filters, filters);
        prop_assert_eq!(state.current_page, page);
    }

    /// The round trip also survives rendering to a query string
    #[test]
    fn test_query_string_round_trip(filters in arb_filters(), page in 1usize..=usize::MAX) {
        let query = encode(&filters, page).to_query_string();
        let state = sanitize_query_string(&query);
        prop_assert_eq!(state, QueryState { filters, current_page: page });
    }

    /// Sanitize never fails and always yields a page >= 1
    #[test]
    fn test_sanitize_total(
        search in proptest::option::of(".{0,8}"),
        sort_by in proptest::option::of(".{0,8}"),
        sort_order in proptest::option::of(".{0,8}"),
        page in proptest::option::of(".{0,8}"),
    ) {
        let params = UrlQueryParams { search, region: None, sort_by, sort_order, page };
        let state = sanitize(&params);
        prop_assert!(state.current_page >= 1);
    }
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_scenario_population_desc() {
    let countries = vec![
        country("Germany".to_string(), 83, "Europe".to_string()),
        country("France".to_string(), 67, "Europe".to_string()),
    ];
    let filters = SearchFilters {
        search_query: String::new(),
        selected_region: String::new(),
        sort_by: SortBy::Population,
        sort_order: SortOrder::Desc,
    };

    let result = filter_and_sort(&countries, &filters);
    let names: Vec<&str> = result.iter().map(|c| c.name.common.as_str()).collect();
    assert_eq!(names, vec!["Germany", "France"]);
}

#[test]
fn test_scenario_typo_tolerance() {
    assert!(matches("Jermny", "Germany", 0.6));
    assert!(!matches("xyz", "Germany", 0.6));
}

#[test]
fn test_scenario_encode_search_only() {
    let filters = SearchFilters {
        search_query: "ger".to_string(),
        ..SearchFilters::default()
    };

    let params = encode(&filters, 1);
    assert_eq!(serde_json::to_value(&params).unwrap(), serde_json::json!({"search": "ger"}));
}

#[test]
fn test_scenario_sanitize_bogus() {
    let params = UrlQueryParams::from_query_string("sortBy=bogus&page=-5");
    let state = sanitize(&params);

    assert_eq!(state.filters.search_query, "");
    assert_eq!(state.filters.selected_region, "");
    assert_eq!(state.filters.sort_by, SortBy::Name);
    assert_eq!(state.filters.sort_order, SortOrder::Asc);
    assert_eq!(state.current_page, 1);
}

#[test]
fn test_stable_name_sort() {
    let countries = vec![
        country("A".to_string(), 1, "Europe".to_string()),
        country("A".to_string(), 2, "Europe".to_string()),
    ];

    let sorted = sort_items(countries.iter().collect(), SortBy::Name, SortOrder::Asc);
    assert_eq!(sorted[0].population, 1);
    assert_eq!(sorted[1].population, 2);
}
