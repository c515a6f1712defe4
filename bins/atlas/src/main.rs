//! Atlas - browse the world's countries from the terminal
//!
//! Lists, searches and filters countries from the REST Countries API (or a
//! local JSON file), with typo-tolerant search and shareable query strings.

use atlas_core::config::Config;
use atlas_telemetry::TelemetryConfig;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod source;

use commands::{Context, OutputFormat, list, query, regions, show};

/// Browse, search and share views of the world's countries
#[derive(Parser)]
#[command(name = "atlas")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Path to atlas.toml (searched in the usual places if not given)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List countries, filtered, sorted and paginated
    List(list::ListArgs),

    /// Show details for one country, including its neighbours
    Show {
        /// Full common or official name, e.g. "Belgium"
        name: String,

        /// Read countries from a JSON file instead of the API
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// List regions with their number of countries
    Regions {
        /// Read countries from a JSON file instead of the API
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Decode and sanitize a shared query string
    Query {
        /// Query string, e.g. "?search=ger&page=2"
        query: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report(&anyhow::Error::from(e), cli.format),
    };

    let telemetry = TelemetryConfig::new(&config.schema.logging.level, config.schema.logging.json)
        .verbose(cli.verbose);
    if let Err(e) = atlas_telemetry::init_with_config(&telemetry) {
        eprintln!("{} {}", "Warning:".yellow().bold(), e);
    }

    if let Some(path) = &config.path {
        tracing::debug!(path = %path.display(), "Loaded configuration");
    }

    let ctx = Context {
        config,
        format: cli.format,
    };

    let result = match cli.command {
        Commands::List(args) => list::run(&ctx, args).await,
        Commands::Show { name, input } => show::run(&ctx, &name, input.as_deref()).await,
        Commands::Regions { input } => regions::run(&ctx, input.as_deref()).await,
        Commands::Query { query } => query::run(&ctx, &query),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, ctx.format),
    }
}

/// Print an error to stderr and pick the exit code
fn report(err: &anyhow::Error, format: OutputFormat) -> ExitCode {
    let Some(core) = err.downcast_ref::<atlas_core::Error>() else {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        return ExitCode::FAILURE;
    };

    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(&core.to_report()) {
            Ok(json) => eprintln!("{json}"),
            Err(_) => eprintln!("{core}"),
        },
        OutputFormat::Text => eprintln!("{} {}", "Error:".red().bold(), core),
    }

    ExitCode::from(u8::try_from(core.code.exit_code()).unwrap_or(1))
}
