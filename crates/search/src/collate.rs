//! Locale-aware string ordering.
//!
//! Approximates the root collation browsers use for `localeCompare`:
//! strings are compared first by base letters ignoring accents and case,
//! then by accents, then by case (lowercase first). Whitespace and
//! punctuation sort before digits, and digits before letters, so
//! "Åland Islands" lands next to "Albania" rather than after "Zimbabwe".

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Character class at the primary level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Separator,
    Digit,
    Letter,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_alphabetic() {
            Self::Letter
        } else if c.is_numeric() {
            Self::Digit
        } else {
            Self::Separator
        }
    }
}

/// Precomputed sort key for a string.
///
/// Field order is comparison order; `Ord` is derived so keys compare level
/// by level.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<(CharClass, char)>,
    secondary: Vec<Vec<char>>,
    tertiary: Vec<bool>,
}

impl CollationKey {
    /// Build the key for `s`.
    pub fn new(s: &str) -> Self {
        let mut primary = Vec::with_capacity(s.len());
        let mut secondary: Vec<Vec<char>> = Vec::with_capacity(s.len());
        let mut tertiary = Vec::with_capacity(s.len());

        for c in s.nfd() {
            if is_combining_mark(c) {
                if let Some(marks) = secondary.last_mut() {
                    marks.push(c);
                }
                continue;
            }

            let folded = c.to_lowercase().next().unwrap_or(c);
            primary.push((CharClass::of(c), folded));
            secondary.push(Vec::new());
            tertiary.push(c.is_uppercase());
        }

        Self {
            primary,
            secondary,
            tertiary,
        }
    }
}

/// Compare two strings in locale-aware order.
///
/// # Example
/// ```
/// use atlas_search::collate::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare("Åland Islands", "Albania"), Ordering::Less);
/// assert_eq!(compare("chad", "Chile"), Ordering::Less);
/// ```
pub fn compare(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}
