//! Regions command - regions with their country counts

use super::{Context, OutputFormat, print_json};
use crate::source::Source;
use anyhow::Result;
use atlas_cli::output::{Status, format_count};
use atlas_search::region_counts;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

/// JSON output for regions
#[derive(Debug, Serialize)]
struct JsonRegionsOutput {
    total: usize,
    regions: Vec<RegionCount>,
}

#[derive(Debug, Serialize)]
struct RegionCount {
    region: String,
    count: usize,
}

/// Run regions command
pub async fn run(ctx: &Context, input: Option<&Path>) -> Result<()> {
    let source = Source::open(input, &ctx.config)?;
    let countries = ctx
        .fetch(&source, "Fetching countries...", source.all())
        .await?;

    let regions: Vec<RegionCount> = region_counts(&countries)
        .into_iter()
        .map(|(region, count)| RegionCount { region, count })
        .collect();

    if ctx.format == OutputFormat::Json {
        return Ok(print_json(&JsonRegionsOutput {
            total: countries.len(),
            regions,
        })?);
    }

    Status::header(&format!(
        "Regions ({})",
        format_count(countries.len(), "country", "countries")
    ));
    for entry in &regions {
        let label = if entry.region.is_empty() {
            "(none)"
        } else {
            entry.region.as_str()
        };
        println!("  {:<12} {}", label, entry.count.to_string().cyan());
    }
    println!();
    println!(
        "{}",
        "Filter with: atlas list --region <REGION>".dimmed()
    );

    Ok(())
}
