//! Fuzzy matching of a query against a name.

use crate::similarity::similarity;
use serde::{Deserialize, Serialize};

/// Similarity a non-substring candidate must reach to count as a match.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Check whether `query` fuzzily matches `target`.
///
/// Both strings are lowercased first. A target that contains the query
/// matches without scoring; anything else matches when its
/// [`similarity`] to the query is at least `threshold`.
///
/// # Arguments
/// * `query` - What the user typed
/// * `target` - Name to test against
/// * `threshold` - Minimum similarity in `[0, 1]`
///
/// # Example
/// ```
/// use atlas_search::matches;
///
/// assert!(matches("Jermny", "Germany", 0.6));
/// assert!(!matches("xyz", "Germany", 0.6));
/// ```
pub fn matches(query: &str, target: &str, threshold: f64) -> bool {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    if target.contains(&query) {
        return true;
    }

    similarity(&query, &target) >= threshold
}

/// [`matches`] with [`DEFAULT_THRESHOLD`].
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    matches(query, target, DEFAULT_THRESHOLD)
}

/// A matcher with a fixed threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuzzyMatcher {
    threshold: f64,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl FuzzyMatcher {
    /// Create a matcher. The threshold is clamped into `[0, 1]`; NaN falls
    /// back to [`DEFAULT_THRESHOLD`].
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self { threshold }
    }

    /// Configured threshold
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Check `query` against `target`.
    #[must_use]
    pub fn is_match(&self, query: &str, target: &str) -> bool {
        matches(query, target, self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_matches() {
        assert!(fuzzy_match("ger", "Germany"));
        assert!(fuzzy_match("MANY", "Germany"));
    }

    #[test]
    fn test_typo_tolerated() {
        assert!(matches("Jermny", "Germany", 0.6));
    }

    #[test]
    fn test_unrelated_rejected() {
        assert!(!matches("xyz", "Germany", 0.6));
    }

    #[test]
    fn test_empty_query_is_substring() {
        assert!(fuzzy_match("", "Peru"));
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        // swapped letters cost 2 edits over 5 chars = 0.6
        assert!(matches("chlie", "chile", 0.6));
        assert!(matches("chxle", "chile", 0.8));
        assert!(!matches("chxle", "chile", 0.81));
    }

    #[test]
    fn test_matcher_clamps_threshold() {
        assert_eq!(FuzzyMatcher::new(1.7).threshold(), 1.0);
        assert_eq!(FuzzyMatcher::new(-0.2).threshold(), 0.0);
        assert_eq!(FuzzyMatcher::new(f64::NAN).threshold(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_matcher_zero_threshold_accepts_anything() {
        let matcher = FuzzyMatcher::new(0.0);
        assert!(matcher.is_match("qqqq", "Fiji"));
    }

    #[test]
    fn test_default_matcher() {
        let matcher = FuzzyMatcher::default();
        assert_eq!(matcher.threshold(), DEFAULT_THRESHOLD);
        assert!(matcher.is_match("brasil", "Brazil"));
    }
}
