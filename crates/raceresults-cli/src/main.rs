//! Exports every event's results from the SES results host to JSON.

mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use raceresults_core::{
    ClientConfig, CollectOptions, DEFAULT_OUTPUT, ExportRunner, FailurePolicy, ResultsScraper,
};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OnError {
    /// Stop the export and write nothing
    Abort,
    /// Drop the failing event and keep going
    SkipEvent,
}

impl From<OnError> for FailurePolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Abort => FailurePolicy::Abort,
            OnError::SkipEvent => FailurePolicy::SkipEvent,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "raceresults", version, about = "Export marathon event results to JSON")]
struct Args {
    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Highest page number requested per event
    #[arg(long)]
    max_pages: Option<u32>,

    /// What to do when an event fails
    #[arg(long, value_enum, default_value_t = OnError::Abort)]
    on_error: OnError,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn collect_options(&self) -> CollectOptions {
        CollectOptions {
            max_pages: self.max_pages,
            failure_policy: self.on_error.into(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    let scraper = ResultsScraper::with_config(ClientConfig::default(), args.collect_options())
        .context("failed to build HTTP client")?;

    let summary = ExportRunner::new(&scraper)
        .run(&args.output)
        .await
        .with_context(|| format!("export to {} failed", args.output.display()))?;

    for event in &summary.events {
        info!(event = %event.event_name, records = event.records, "collected");
    }
    for event in &summary.skipped {
        warn!(event = %event, "skipped");
    }
    info!(
        "Wrote {} results to {}",
        summary.total_records(),
        summary.output.display()
    );

    Ok(())
}
