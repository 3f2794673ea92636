//! Export of every event's results to a JSON file

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::Result;
use crate::scraper::{FailurePolicy, ResultsScraper};
use crate::types::{Event, RaceResult};

/// Default output file
pub const DEFAULT_OUTPUT: &str = "results.json";

/// Records collected for one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    pub event_name: String,
    pub records: usize,
}

/// Outcome of a completed export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Events that were collected, in export order
    pub events: Vec<EventSummary>,
    /// Events dropped under [`FailurePolicy::SkipEvent`]
    pub skipped: Vec<String>,
    /// File the results were written to
    pub output: PathBuf,
}

impl ExportSummary {
    pub fn total_records(&self) -> usize {
        self.events.iter().map(|e| e.records).sum()
    }
}

/// Runs an export over a fixed list of events
pub struct ExportRunner<'a> {
    scraper: &'a ResultsScraper,
    events: Vec<(u32, String)>,
}

impl<'a> ExportRunner<'a> {
    /// Runner over all known events in table order
    pub fn new(scraper: &'a ResultsScraper) -> Self {
        Self::with_events(
            scraper,
            Event::ALL.iter().map(|e| (e.id(), e.name().to_string())),
        )
    }

    /// Runner over an explicit `(event id, event name)` list
    pub fn with_events<I>(scraper: &'a ResultsScraper, events: I) -> Self
    where
        I: IntoIterator<Item = (u32, String)>,
    {
        Self {
            scraper,
            events: events.into_iter().collect(),
        }
    }

    /// Collect all events, in order, into one sequence
    ///
    /// # Errors
    /// Under [`FailurePolicy::Abort`] the first event error is returned.
    pub async fn collect_all(&self) -> Result<(Vec<RaceResult>, Vec<EventSummary>, Vec<String>)> {
        let mut results = Vec::new();
        let mut summaries = Vec::new();
        let mut skipped = Vec::new();

        for (event_id, event_name) in &self.events {
            match self.scraper.collect_event(*event_id, event_name).await {
                Ok(event_results) => {
                    summaries.push(EventSummary {
                        event_name: event_name.clone(),
                        records: event_results.len(),
                    });
                    results.extend(event_results);
                }
                Err(e) if self.scraper.options().failure_policy == FailurePolicy::SkipEvent => {
                    error!(event = %event_name, error = %e, "skipping event");
                    skipped.push(event_name.clone());
                }
                Err(e) => return Err(e),
            }
        }

        Ok((results, summaries, skipped))
    }

    /// Collect all events and write them as a JSON array to `output`
    ///
    /// The file is only written once every event has been collected, so a
    /// failed run leaves no output behind.
    pub async fn run(&self, output: impl AsRef<Path>) -> Result<ExportSummary> {
        let output = output.as_ref();
        let (results, events, skipped) = self.collect_all().await?;

        let json = serde_json::to_vec(&results)?;
        tokio::fs::write(output, json).await?;

        let summary = ExportSummary {
            events,
            skipped,
            output: output.to_path_buf(),
        };
        info!(
            records = summary.total_records(),
            skipped = summary.skipped.len(),
            output = %output.display(),
            "export written"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runner_covers_all_events() {
        let scraper = ResultsScraper::new().unwrap();
        let runner = ExportRunner::new(&scraper);
        let ids: Vec<u32> = runner.events.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![1, 8, 2, 6, 3, 9, 4, 5]);
        assert_eq!(runner.events[3].1, "Wheelchair Half Marathon");
    }

    #[test]
    fn test_summary_total() {
        let summary = ExportSummary {
            events: vec![
                EventSummary { event_name: "Marathon".to_string(), records: 3 },
                EventSummary { event_name: "5km".to_string(), records: 4 },
            ],
            skipped: vec![],
            output: PathBuf::from(DEFAULT_OUTPUT),
        };
        assert_eq!(summary.total_records(), 7);
    }
}
