//! Race Results Scraper Core Library
//!
//! Collects paginated marathon results from the SES results host and
//! exports them as JSON.
//!
//! # Overview
//!
//! - HTTP client fetching one results page at a time
//! - Results grid parser with named column positions
//! - Country table resolving flag image tokens to country names
//! - Export runner walking every event and writing `results.json`
//!
//! # Example
//!
//! ```no_run
//! use raceresults_core::{ExportRunner, ResultsScraper, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = ResultsScraper::new()?;
//!     let summary = ExportRunner::new(&scraper).run("results.json").await?;
//!     println!("{} results written", summary.total_records());
//!     Ok(())
//! }
//! ```
//!
//! Requests run one at a time. Pagination for an event stops at the first
//! page without a results grid.

mod client;
pub mod country;
mod error;
mod export;
pub mod parser;
mod scraper;
mod types;
pub mod url;

pub use client::{ClientConfig, ResultsClient};

pub use country::{CountryTable, country_token};

pub use error::{RaceResultsError, Result};

pub use export::{DEFAULT_OUTPUT, EventSummary, ExportRunner, ExportSummary};

pub use parser::parse_results_page;

pub use scraper::{CollectOptions, FailurePolicy, ResultsScraper};

pub use types::{Event, RaceResult, UNKNOWN_COUNTRY};
