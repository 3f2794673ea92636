//! Main scraper API for the results host
//!
//! Combines the HTTP client, the results grid parser and the country table
//! to collect every result of an event across its pages.

use tracing::{debug, info};

use crate::client::{ClientConfig, ResultsClient};
use crate::country::CountryTable;
use crate::error::{RaceResultsError, Result};
use crate::parser::parse_results_page;
use crate::types::{Event, RaceResult};

/// What an export does when one event fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the whole export; nothing is written
    #[default]
    Abort,
    /// Log the failure, drop that event's results and continue
    SkipEvent,
}

/// Options controlling pagination and failure handling
#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    /// Highest page number requested per event; `None` is unbounded
    pub max_pages: Option<u32>,
    /// Behavior when an event fails
    pub failure_policy: FailurePolicy,
}

/// Main scraper API for the results host
pub struct ResultsScraper {
    client: ResultsClient,
    countries: CountryTable,
    options: CollectOptions,
}

impl ResultsScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default(), CollectOptions::default())
    }

    /// Create a new scraper with custom client configuration and options
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig, options: CollectOptions) -> Result<Self> {
        let client = ResultsClient::with_config(config)?;
        Ok(Self {
            client,
            countries: CountryTable::iso3166(),
            options,
        })
    }

    /// Replace the country table used to resolve flags
    pub fn with_countries(mut self, countries: CountryTable) -> Self {
        self.countries = countries;
        self
    }

    pub fn options(&self) -> &CollectOptions {
        &self.options
    }

    /// Fetch and parse a single page of an event
    ///
    /// # Returns
    /// Results on the page, empty when the page does not exist
    pub async fn fetch_page(
        &self,
        event_id: u32,
        event_name: &str,
        page: u32,
    ) -> Result<Vec<RaceResult>> {
        let html = self.client.fetch_page(event_id, page).await?;
        parse_results_page(&html, event_name, &self.countries, page)
    }

    /// Collect every result of an event
    ///
    /// Requests pages 1, 2, ... until a page without results. The empty
    /// page is requested; the one after it is not.
    ///
    /// # Errors
    /// - `HttpError` if any page request fails
    /// - `MalformedRow` or `InvalidBibNumber` if a page cannot be parsed
    /// - `PageLimitExceeded` if `max_pages` pages all had results
    pub async fn collect_event(
        &self,
        event_id: u32,
        event_name: &str,
    ) -> Result<Vec<RaceResult>> {
        info!(
            event_id,
            event = event_name,
            "Getting results for event: {}",
            event_name
        );

        let mut results = Vec::new();
        let mut page = 1;

        loop {
            if let Some(limit) = self.options.max_pages
                && page > limit
            {
                return Err(RaceResultsError::PageLimitExceeded {
                    event: event_name.to_string(),
                    limit,
                });
            }

            let page_results = self.fetch_page(event_id, event_name, page).await?;
            if page_results.is_empty() {
                break;
            }

            results.extend(page_results);
            page += 1;
        }

        debug!(
            event = event_name,
            pages = page - 1,
            records = results.len(),
            "event collected"
        );
        Ok(results)
    }

    /// Collect every result of one of the known events
    pub async fn collect(&self, event: Event) -> Result<Vec<RaceResult>> {
        self.collect_event(event.id(), event.name()).await
    }
}
