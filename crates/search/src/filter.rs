//! Search, region filter and sort over a country collection.
//!
//! Every function takes the collection by value and hands back a collection.
//! Pass `&countries` (or any iterator of references) to work on borrowed
//! data; the pipeline never clones items.

use crate::collate::CollationKey;
use crate::fuzzy::{DEFAULT_THRESHOLD, matches};
use crate::model::Searchable;
use crate::{SearchFilters, SortBy, SortOrder};
use std::cmp::Ordering;
use tracing::debug;

/// Region value meaning "no region filter".
pub const ALL_REGIONS: &str = "All";

/// Collections at least this large evaluate the search predicate in parallel.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_ITEMS: usize = 512;

/// Keep items whose common or official name fuzzily matches `query`.
///
/// A blank query (empty or whitespace only) returns `items` untouched.
pub fn filter_by_search<T: Searchable>(items: Vec<T>, query: &str) -> Vec<T> {
    filter_by_search_with_threshold(items, query, DEFAULT_THRESHOLD)
}

/// [`filter_by_search`] with an explicit similarity threshold.
pub fn filter_by_search_with_threshold<T: Searchable>(
    items: Vec<T>,
    query: &str,
    threshold: f64,
) -> Vec<T> {
    if query.trim().is_empty() {
        return items;
    }

    retain_matching(items, |item| {
        matches(query, item.common_name(), threshold)
            || matches(query, item.official_name(), threshold)
    })
}

/// Keep items whose region equals `region` exactly (case-sensitive).
///
/// An empty region or [`ALL_REGIONS`] returns `items` untouched.
pub fn filter_by_region<T: Searchable>(mut items: Vec<T>, region: &str) -> Vec<T> {
    if region.is_empty() || region == ALL_REGIONS {
        return items;
    }

    items.retain(|item| item.region() == region);
    items
}

/// Sort items by name (locale-aware) or population.
///
/// The sort is stable in both directions: items with equal keys keep the
/// order they arrived in.
pub fn sort_items<T: Searchable>(items: Vec<T>, sort_by: SortBy, sort_order: SortOrder) -> Vec<T> {
    let directed = |ordering: Ordering| match sort_order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    };

    match sort_by {
        SortBy::Name => {
            let mut keyed: Vec<(CollationKey, T)> = items
                .into_iter()
                .map(|item| (CollationKey::new(item.common_name()), item))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| directed(a.cmp(b)));
            keyed.into_iter().map(|(_, item)| item).collect()
        }
        SortBy::Population => {
            let mut items = items;
            items.sort_by(|a, b| directed(a.population().cmp(&b.population())));
            items
        }
    }
}

/// Apply search, then region filter, then sort.
///
/// # Example
/// ```
/// use atlas_search::{filter_and_sort, Country, CountryName, Flags, SearchFilters, SortBy, SortOrder};
///
/// let country = |name: &str, population| Country {
///     name: CountryName { common: name.into(), official: name.into() },
///     population,
///     region: "Europe".into(),
///     capital: vec![],
///     flags: Flags::default(),
///     cca3: name[..3].to_uppercase(),
/// };
/// let countries = vec![country("France", 67), country("Germany", 83)];
///
/// let filters = SearchFilters {
///     sort_by: SortBy::Population,
///     sort_order: SortOrder::Desc,
///     ..SearchFilters::default()
/// };
/// let sorted = filter_and_sort(&countries, &filters);
/// assert_eq!(sorted[0].name.common, "Germany");
/// ```
pub fn filter_and_sort<T, I>(items: I, filters: &SearchFilters) -> Vec<T>
where
    T: Searchable,
    I: IntoIterator<Item = T>,
{
    filter_and_sort_with_threshold(items, filters, DEFAULT_THRESHOLD)
}

/// [`filter_and_sort`] with an explicit similarity threshold.
pub fn filter_and_sort_with_threshold<T, I>(items: I, filters: &SearchFilters, threshold: f64) -> Vec<T>
where
    T: Searchable,
    I: IntoIterator<Item = T>,
{
    let items: Vec<T> = items.into_iter().collect();
    let total = items.len();

    let items = filter_by_search_with_threshold(items, &filters.search_query, threshold);
    let after_search = items.len();

    let items = filter_by_region(items, &filters.selected_region);
    let after_region = items.len();

    let items = sort_items(items, filters.sort_by, filters.sort_order);

    debug!(
        total,
        after_search,
        after_region,
        sort_by = %filters.sort_by,
        sort_order = %filters.sort_order,
        "Filtered country collection"
    );

    items
}

/// Retain items passing `keep`, preserving order.
fn retain_matching<T, F>(items: Vec<T>, keep: F) -> Vec<T>
where
    T: Searchable,
    F: Fn(&T) -> bool + Sync,
{
    #[cfg(feature = "parallel")]
    {
        if items.len() >= PARALLEL_MIN_ITEMS {
            use rayon::prelude::*;

            let verdicts: Vec<bool> = items.par_iter().map(|item| keep(item)).collect();
            return items
                .into_iter()
                .zip(verdicts)
                .filter_map(|(item, kept)| kept.then_some(item))
                .collect();
        }
    }

    let mut items = items;
    items.retain(|item| keep(item));
    items
}
