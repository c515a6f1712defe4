//! Page slicing and page metadata.

use serde::{Deserialize, Serialize};

/// Return the items on page `current_page` (1-based).
///
/// Pages past the end yield an empty slice. The caller is expected to pass
/// a sanitized page (>= 1) and a positive page size; page 0 is treated like
/// page 1 and a page size of 0 yields nothing.
///
/// # Example
/// ```
/// use atlas_search::paginate;
///
/// let items: Vec<u32> = (1..=25).collect();
/// assert_eq!(paginate(&items, 3, 10), &[21, 22, 23, 24, 25]);
/// assert!(paginate(&items, 4, 10).is_empty());
/// ```
pub fn paginate<T>(items: &[T], current_page: usize, items_per_page: usize) -> &[T] {
    let Some(start) = current_page.saturating_sub(1).checked_mul(items_per_page) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(items_per_page).min(items.len());
    &items[start..end]
}

/// Derived pagination state for a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Page being shown (1-based)
    pub current_page: usize,
    /// Number of pages; 0 for an empty result set
    pub total_pages: usize,
    /// Number of items across all pages
    pub total_items: usize,
    /// Page size
    pub items_per_page: usize,
}

impl PageInfo {
    /// Derive page metadata.
    #[must_use]
    pub fn new(total_items: usize, items_per_page: usize, current_page: usize) -> Self {
        let total_pages = if items_per_page == 0 {
            0
        } else {
            total_items.div_ceil(items_per_page)
        };

        Self {
            current_page,
            total_pages,
            total_items,
            items_per_page,
        }
    }

    /// Whether a page before this one exists
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 1 && self.total_pages > 0
    }

    /// Whether a page after this one exists
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether the current page lies past the last page
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        self.current_page > self.total_pages
    }

    /// 1-based inclusive range of the items shown, `None` when the page is empty.
    #[must_use]
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.is_out_of_range() || self.current_page == 0 {
            return None;
        }

        let first = (self.current_page - 1) * self.items_per_page + 1;
        let last = (self.current_page * self.items_per_page).min(self.total_items);
        Some((first, last))
    }
}
