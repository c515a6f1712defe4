//! Edit-distance similarity scoring.

/// Calculate Levenshtein edit distance between two strings.
///
/// Fills a `(len(b) + 1) x (len(a) + 1)` table where each cell holds the
/// distance between the prefixes ending there. Insertions, deletions and
/// substitutions cost 1; equal characters cost 0. Lengths are counted in
/// `char`s, not bytes.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform `a` into `b`
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let cols = a_chars.len();
    let rows = b_chars.len();

    let mut table = vec![vec![0usize; cols + 1]; rows + 1];

    for (i, cell) in table[0].iter_mut().enumerate() {
        *cell = i;
    }
    for (j, row) in table.iter_mut().enumerate() {
        row[0] = j;
    }

    for j in 1..=rows {
        for i in 1..=cols {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            table[j][i] = (table[j][i - 1] + 1)
                .min(table[j - 1][i] + 1)
                .min(table[j - 1][i - 1] + cost);
        }
    }

    table[rows][cols]
}

/// Normalized similarity between two strings in `[0, 1]`.
///
/// `1 - edit_distance(a, b) / max(len(a), len(b))`. Two empty strings are
/// identical and score 1.
///
/// # Example
/// ```
/// use atlas_search::similarity;
///
/// assert_eq!(similarity("kitten", "kitten"), 1.0);
/// assert!((similarity("kitten", "sitting") - 4.0 / 7.0).abs() < 1e-9);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = edit_distance(a, b);
    (max_len - distance) as f64 / max_len as f64
}
