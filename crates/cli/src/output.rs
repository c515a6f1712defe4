//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use console::{Alignment, pad_str};
use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(console::measure_text_width(message)));
    }

    /// Print a subheader
    pub fn subheader(message: &str) {
        println!();
        println!("{}", message.bold().dimmed());
    }
}

/// Shown in place of a missing value
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{mins}m {remaining_secs:.0}s")
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Format a population with comma thousands separators, e.g. `331,002,651`
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// First capital, or `N/A` when there is none
pub fn format_capital(capitals: &[String]) -> &str {
    capitals
        .first()
        .map(String::as_str)
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(NOT_AVAILABLE)
}

/// Join a list for display, or `N/A` when it is empty
pub fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        items.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ")
    }
}

/// A `label: value` row with the label padded to `width` columns
pub fn field_row(label: &str, value: &str, width: usize) -> String {
    let label = format!("{label}:");
    format!(
        "  {} {}",
        pad_str(&label, width + 1, Alignment::Left, None).dimmed(),
        value
    )
}
