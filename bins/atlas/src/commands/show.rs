//! Show command - one country in detail

use super::{Context, OutputFormat, print_json};
use crate::source::Source;
use anyhow::Result;
use atlas_cli::output::{Status, field_row, format_list, format_population, NOT_AVAILABLE};
use atlas_core::Error;
use atlas_search::{Country, CountryDetail};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

/// JSON output for show
#[derive(Debug, Serialize)]
struct JsonShowOutput<'a> {
    country: &'a CountryDetail,
    borders: &'a [Country],
}

/// Run show command
pub async fn run(ctx: &Context, name: &str, input: Option<&Path>) -> Result<()> {
    let source = Source::open(input, &ctx.config)?;

    let detail = ctx
        .fetch(&source, &format!("Looking up {name}..."), source.by_name(name))
        .await?
        .ok_or_else(|| Error::country_not_found(name))?;

    let borders = ctx
        .fetch(&source, "Resolving borders...", source.by_codes(&detail.borders))
        .await?;

    if ctx.format == OutputFormat::Json {
        return Ok(print_json(&JsonShowOutput {
            country: &detail,
            borders: &borders,
        })?);
    }

    print_detail(&detail, &borders);
    Ok(())
}

const LABEL_WIDTH: usize = 16;

fn print_detail(detail: &CountryDetail, borders: &[Country]) {
    Status::header(&detail.name.common);

    let row = |label: &str, value: &str| println!("{}", field_row(label, value, LABEL_WIDTH));

    row("Official name", &detail.name.official);
    row("Native names", &native_names(detail));
    row("Population", &format_population(detail.population));
    row("Region", &detail.region);
    row(
        "Subregion",
        if detail.subregion.is_empty() {
            NOT_AVAILABLE
        } else {
            detail.subregion.as_str()
        },
    );
    row("Capital", &format_list(&detail.capital));
    row("Top-level domain", &format_list(&detail.tld));
    row("Currencies", &currencies(detail));
    row(
        "Languages",
        &format_list(&detail.languages.values().collect::<Vec<_>>()),
    );

    Status::subheader("Border countries");
    if borders.is_empty() {
        println!("  {}", "None".dimmed());
    } else {
        for border in borders {
            println!("  {} {}", border.name.common, format!("({})", border.cca3).dimmed());
        }
    }
}

/// Distinct native common names, e.g. "België, Belgien, Belgique"
fn native_names(detail: &CountryDetail) -> String {
    let mut seen = HashSet::new();
    let names: Vec<&str> = detail
        .name
        .native_name
        .values()
        .map(|n| n.common.as_str())
        .filter(|name| seen.insert(*name))
        .collect();
    format_list(&names)
}

/// Currencies as "Euro (€)"
fn currencies(detail: &CountryDetail) -> String {
    let formatted: Vec<String> = detail
        .currencies
        .values()
        .map(|c| {
            if c.symbol.is_empty() {
                c.name.clone()
            } else {
                format!("{} ({})", c.name, c.symbol)
            }
        })
        .collect();
    format_list(&formatted)
}
