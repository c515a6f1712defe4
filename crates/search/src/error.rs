//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur when parsing search state from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Unknown sort field
    #[error("Invalid sort field: {0:?} (expected \"name\" or \"population\")")]
    InvalidSortField(String),

    /// Unknown sort direction
    #[error("Invalid sort order: {0:?} (expected \"asc\" or \"desc\")")]
    InvalidSortOrder(String),
}
