//! CLI command implementations

pub mod list;
pub mod query;
pub mod regions;
pub mod show;

use crate::source::Source;
use atlas_cli::output::format_duration;
use atlas_cli::progress;
use atlas_core::config::Config;
use atlas_core::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::future::Future;
use std::time::Duration;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored text
    Text,
    /// Pretty-printed JSON on stdout
    Json,
}

/// State shared by every command
pub struct Context {
    pub config: Config,
    pub format: OutputFormat,
}

impl Context {
    /// Run a source read, with a spinner when it goes over the network in text mode
    pub async fn fetch<T, F>(&self, source: &Source, message: &str, read: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if !source.is_remote() || self.format == OutputFormat::Json {
            return read.await;
        }

        let timer = atlas_telemetry::Timer::start(message);
        let pb = progress::spinner(message);
        let result = read.await;
        let elapsed = timer.stop();
        match &result {
            Ok(_) => progress::finish_success(&pb, &done_message(message, elapsed)),
            Err(_) => progress::finish_clear(&pb),
        }
        result
    }
}

/// Spinner message for a completed fetch, e.g. `Fetching countries (320ms)`
fn done_message(message: &str, elapsed: Duration) -> String {
    format!("{} ({})", message.trim_end_matches('.'), format_duration(elapsed))
}

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
