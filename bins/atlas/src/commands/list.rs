//! List command - filter, sort and paginate countries

use super::{Context, OutputFormat, print_json};
use crate::source::Source;
use anyhow::Result;
use atlas_cli::output::{Status, field_row, format_capital, format_count, format_population};
use atlas_core::Error;
use atlas_search::{
    Country, PageInfo, QueryState, SortBy, SortOrder, filter_and_sort_with_threshold, paginate,
    sanitize_query_string,
};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for `atlas list`
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Search text, matched against common and official names (typos allowed)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show this region ("All" shows every region)
    #[arg(short, long)]
    pub region: Option<String>,

    /// Sort field: name or population
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort direction: asc or desc
    #[arg(short, long)]
    pub order: Option<String>,

    /// Page to show (1-based)
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Countries per page (default from atlas.toml)
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Start from a shared query string, e.g. "?search=ger&page=2"
    #[arg(short, long)]
    pub query: Option<String>,

    /// Fuzzy match threshold between 0 and 1 (default from atlas.toml)
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Read countries from a JSON file instead of the API
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// JSON output for list
#[derive(Debug, Serialize)]
struct JsonListOutput<'a> {
    countries: &'a [&'a Country],
    pagination: PageInfo,
    query: String,
}

/// Resolved view settings for one listing
#[derive(Debug, Clone, PartialEq)]
struct ListView {
    state: QueryState,
    per_page: usize,
    threshold: f64,
}

impl ListArgs {
    /// Seed state from `--query`, then let explicit flags override it
    fn resolve(&self, ctx: &Context) -> atlas_core::Result<ListView> {
        let mut state = self
            .query
            .as_deref()
            .map(sanitize_query_string)
            .unwrap_or_default();

        if let Some(search) = &self.search {
            state.filters.search_query.clone_from(search);
        }
        if let Some(region) = &self.region {
            state.filters.selected_region.clone_from(region);
        }
        if let Some(sort_by) = &self.sort_by {
            state.filters.sort_by = sort_by.parse::<SortBy>().map_err(|e| {
                Error::invalid_input(e.to_string()).with_suggestion("Use --sort-by name or --sort-by population")
            })?;
        }
        if let Some(order) = &self.order {
            state.filters.sort_order = order.parse::<SortOrder>().map_err(|e| {
                Error::invalid_input(e.to_string()).with_suggestion("Use --order asc or --order desc")
            })?;
        }
        if let Some(page) = self.page {
            state.current_page = page.max(1);
        }

        let browse = &ctx.config.schema.browse;
        let per_page = self.per_page.unwrap_or(browse.items_per_page);
        if per_page == 0 {
            return Err(Error::invalid_input("--per-page must be at least 1"));
        }

        let threshold = self.threshold.unwrap_or(browse.fuzzy_threshold);
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::invalid_input(format!(
                "--threshold {threshold} is outside 0.0..=1.0"
            )));
        }

        Ok(ListView {
            state,
            per_page,
            threshold,
        })
    }
}

/// Run list command
pub async fn run(ctx: &Context, args: ListArgs) -> Result<()> {
    let view = args.resolve(ctx)?;
    let source = Source::open(args.input.as_deref(), &ctx.config)?;

    let countries = ctx
        .fetch(&source, "Fetching countries...", source.all())
        .await?;

    let results =
        filter_and_sort_with_threshold(&countries, &view.state.filters, view.threshold);
    let page = paginate(&results, view.state.current_page, view.per_page);
    let pagination = PageInfo::new(results.len(), view.per_page, view.state.current_page);
    let query = view.state.to_query_string();

    tracing::debug!(
        total = countries.len(),
        matched = results.len(),
        shown = page.len(),
        "Listing countries"
    );

    if ctx.format == OutputFormat::Json {
        return Ok(print_json(&JsonListOutput {
            countries: page,
            pagination,
            query,
        })?);
    }

    Status::header(&format!(
        "Countries ({})",
        format_count(results.len(), "match", "matches")
    ));

    for country in page {
        print_card(country);
    }

    print_summary(&pagination);
    if query.is_empty() {
        println!("{} {}", "Share:".dimmed(), "(default view)".dimmed());
    } else {
        println!("{} ?{}", "Share:".dimmed(), query.cyan());
    }

    Ok(())
}

const LABEL_WIDTH: usize = 10;

fn print_card(country: &Country) {
    println!();
    println!("{}", country.name.common.bold());
    println!("{}", field_row("Population", &format_population(country.population), LABEL_WIDTH));
    println!("{}", field_row("Region", &country.region, LABEL_WIDTH));
    println!("{}", field_row("Capital", format_capital(&country.capital), LABEL_WIDTH));
}

fn print_summary(pagination: &PageInfo) {
    println!();
    if pagination.total_items == 0 {
        Status::info("No countries match the current filters");
        return;
    }

    match pagination.item_range() {
        Some((first, last)) => println!(
            "Page {} of {} · showing {}-{} of {}",
            pagination.current_page,
            pagination.total_pages,
            first,
            last,
            format_count(pagination.total_items, "country", "countries")
        ),
        None => Status::warning(&format!(
            "Page {} is past the last page ({})",
            pagination.current_page, pagination.total_pages
        )),
    }
}
