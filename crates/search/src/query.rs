//! Mapping between list state and URL query parameters.
//!
//! Encoding is sparse: a key is written only when its value differs from
//! the default, so the default view has no query string at all. Decoding
//! substitutes defaults for anything missing; [`sanitize`] additionally
//! clamps out-of-domain values and is the entry point for untrusted input.
//!
//! | Key         | Field             | Default |
//! |-------------|-------------------|---------|
//! | `search`    | `search_query`    | `""`    |
//! | `region`    | `selected_region` | `""`    |
//! | `sortBy`    | `sort_by`         | `name`  |
//! | `sortOrder` | `sort_order`      | `asc`   |
//! | `page`      | current page      | `1`     |

use crate::filters::{SearchFilters, SortBy, SortOrder};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

const KEY_SEARCH: &str = "search";
const KEY_REGION: &str = "region";
const KEY_SORT_BY: &str = "sortBy";
const KEY_SORT_ORDER: &str = "sortOrder";
const KEY_PAGE: &str = "page";

/// Query parameters as they appear in the address bar.
///
/// `None` means the key is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlQueryParams {
    /// Search text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Sort field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Sort direction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    /// Page number as text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

impl UrlQueryParams {
    /// Collect known keys from decoded pairs. The first occurrence of a
    /// repeated key wins; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                KEY_SEARCH => &mut params.search,
                KEY_REGION => &mut params.region,
                KEY_SORT_BY => &mut params.sort_by,
                KEY_SORT_ORDER => &mut params.sort_order,
                KEY_PAGE => &mut params.page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }

        params
    }

    /// Parse an `application/x-www-form-urlencoded` query string.
    /// A leading `?` is accepted.
    ///
    /// # Example
    /// ```
    /// use atlas_search::UrlQueryParams;
    ///
    /// let params = UrlQueryParams::from_query_string("?search=south+africa&page=2");
    /// assert_eq!(params.search.as_deref(), Some("south africa"));
    /// assert_eq!(params.page.as_deref(), Some("2"));
    /// ```
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(form_urlencoded::parse(query.as_bytes()))
    }

    /// Render as a query string without the leading `?`.
    ///
    /// Keys appear in a fixed order; no keys renders as `""`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        for (key, value) in self.pairs() {
            serializer.append_pair(key, value);
        }

        serializer.finish()
    }

    /// Present keys and values in canonical order
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (KEY_SEARCH, &self.search),
            (KEY_REGION, &self.region),
            (KEY_SORT_BY, &self.sort_by),
            (KEY_SORT_ORDER, &self.sort_order),
            (KEY_PAGE, &self.page),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
    }

    /// Whether no key is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs().next().is_none()
    }
}

/// Decoded but unvalidated list state.
///
/// Sort values are kept as text because [`decode`] does not check them;
/// call [`DecodedQuery::sanitize`] to obtain typed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedQuery {
    /// Search text
    pub search_query: String,
    /// Region
    pub selected_region: String,
    /// Sort field, possibly invalid
    pub sort_by: String,
    /// Sort direction, possibly invalid
    pub sort_order: String,
    /// Page number, possibly below 1
    pub current_page: i128,
}

impl DecodedQuery {
    /// Clamp every field into its domain.
    #[must_use]
    pub fn sanitize(self) -> QueryState {
        let current_page = usize::try_from(self.current_page.max(1)).unwrap_or(usize::MAX);

        QueryState {
            filters: SearchFilters {
                search_query: self.search_query,
                selected_region: self.selected_region,
                sort_by: self.sort_by.parse().unwrap_or_default(),
                sort_order: self.sort_order.parse().unwrap_or_default(),
            },
            current_page,
        }
    }
}

/// Validated list state: filters plus the page being shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    /// Filters
    pub filters: SearchFilters,
    /// Page (>= 1)
    pub current_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            filters: SearchFilters::default(),
            current_page: 1,
        }
    }
}

impl QueryState {
    /// Sparse query parameters for this state
    #[must_use]
    pub fn to_params(&self) -> UrlQueryParams {
        encode(&self.filters, self.current_page)
    }

    /// Shareable query string for this state, `""` for the default view
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.to_params().to_query_string()
    }
}

/// Encode filters and page, omitting every key that holds its default.
///
/// # Example
/// ```
/// use atlas_search::{encode, SearchFilters};
///
/// let filters = SearchFilters { search_query: "ger".into(), ..SearchFilters::default() };
/// let params = encode(&filters, 1);
/// assert_eq!(params.search.as_deref(), Some("ger"));
/// assert!(params.page.is_none());
/// ```
pub fn encode(filters: &SearchFilters, current_page: usize) -> UrlQueryParams {
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());

    UrlQueryParams {
        search: non_empty(&filters.search_query),
        region: non_empty(&filters.selected_region),
        sort_by: (filters.sort_by != SortBy::default()).then(|| filters.sort_by.to_string()),
        sort_order: (filters.sort_order != SortOrder::default())
            .then(|| filters.sort_order.to_string()),
        page: (current_page != 1).then(|| current_page.to_string()),
    }
}

/// Read each key, falling back to its default when absent or empty.
///
/// Sort values are passed through unchecked. The page is parsed from its
/// leading integer; text without one, and zero, fall back to 1.
pub fn decode(params: &UrlQueryParams) -> DecodedQuery {
    let text_or = |value: &Option<String>, default: &str| {
        value
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
            .to_string()
    };

    let current_page = params
        .page
        .as_deref()
        .and_then(parse_leading_int)
        .filter(|page| *page != 0)
        .unwrap_or(1);

    DecodedQuery {
        search_query: text_or(&params.search, ""),
        selected_region: text_or(&params.region, ""),
        sort_by: text_or(&params.sort_by, SortBy::default().as_str()),
        sort_order: text_or(&params.sort_order, SortOrder::default().as_str()),
        current_page,
    }
}

/// Decode and clamp untrusted parameters.
///
/// Unknown sort fields become `name`, unknown directions `asc`, and pages
/// below 1 become 1. Never fails.
///
/// # Example
/// ```
/// use atlas_search::{sanitize, QueryState, UrlQueryParams};
///
/// let params = UrlQueryParams {
///     sort_by: Some("bogus".into()),
///     page: Some("-5".into()),
///     ..UrlQueryParams::default()
/// };
/// assert_eq!(sanitize(&params), QueryState::default());
/// ```
pub fn sanitize(params: &UrlQueryParams) -> QueryState {
    decode(params).sanitize()
}

/// [`sanitize`] a raw query string.
pub fn sanitize_query_string(query: &str) -> QueryState {
    sanitize(&UrlQueryParams::from_query_string(query))
}

/// Parse the leading integer of `text`.
///
/// Leading whitespace and one sign are accepted; parsing stops at the
/// first non-digit. Values beyond `i128` saturate, which covers every
/// `usize` page.
fn parse_leading_int(text: &str) -> Option<i128> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i128 = 0;
    let mut seen_digit = false;

    for digit in digits.bytes().map_while(|b| b.is_ascii_digit().then(|| i128::from(b - b'0'))) {
        seen_digit = true;
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }

    seen_digit.then_some(value)
}
