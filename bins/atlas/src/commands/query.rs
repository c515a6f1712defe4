//! Query command - decode a shared query string

use super::{Context, OutputFormat, print_json};
use anyhow::Result;
use atlas_cli::output::{Status, field_row};
use atlas_search::{QueryState, UrlQueryParams, decode, sanitize};
use owo_colors::OwoColorize;
use serde::Serialize;

/// JSON output for query
#[derive(Debug, Serialize)]
struct JsonQueryOutput {
    params: UrlQueryParams,
    state: QueryState,
    query: String,
}

/// Run query command
pub fn run(ctx: &Context, raw: &str) -> Result<()> {
    let params = UrlQueryParams::from_query_string(raw);
    let decoded = decode(&params);
    let state = sanitize(&params);
    let query = state.to_query_string();

    tracing::debug!(
        raw,
        sort_by = %decoded.sort_by,
        sort_order = %decoded.sort_order,
        page = %decoded.current_page,
        "Decoded query"
    );

    if ctx.format == OutputFormat::Json {
        return Ok(print_json(&JsonQueryOutput {
            params,
            state,
            query,
        })?);
    }

    let filters = &state.filters;
    let or_any = |value: &str| {
        if value.is_empty() {
            "(any)".to_string()
        } else {
            value.to_string()
        }
    };

    Status::header("Query");
    println!("{}", field_row("Search", &or_any(&filters.search_query), 10));
    println!("{}", field_row("Region", &or_any(&filters.selected_region), 10));
    println!("{}", field_row("Sort by", filters.sort_by.as_str(), 10));
    println!("{}", field_row("Order", filters.sort_order.as_str(), 10));
    println!("{}", field_row("Page", &state.current_page.to_string(), 10));

    if decoded.sort_by != filters.sort_by.as_str() || decoded.sort_order != filters.sort_order.as_str() {
        Status::warning("Unrecognized sort values were replaced with defaults");
    }

    println!();
    if query.is_empty() {
        println!("{} {}", "Canonical:".dimmed(), "(default view)".dimmed());
    } else {
        println!("{} ?{}", "Canonical:".dimmed(), query.cyan());
    }

    Ok(())
}
