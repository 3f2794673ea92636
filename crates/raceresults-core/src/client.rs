//! HTTP client for the results host
//!
//! Issues one GET per results page. Requests are not retried; any
//! non-success status is returned as an error.

use std::time::Duration;

use tracing::{debug, info};

use crate::error::{RaceResultsError, Result};
use crate::url::{BASE_URL, build_results_url};

const USER_AGENT: &str = concat!("raceresults/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Host to request pages from (default: the public results host)
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            base_url: BASE_URL.to_string(),
        }
    }
}

/// HTTP client wrapper for results pages
pub struct ResultsClient {
    client: reqwest::Client,
    base_url: String,
}

impl ResultsClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(RaceResultsError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Fetch one page of an event's results as raw HTML
    ///
    /// # Errors
    /// - `HttpError` - Network errors or a non-success status
    pub async fn fetch_page(&self, event_id: u32, page: u32) -> Result<String> {
        info!(event_id, page, "Requesting page {}", page);

        let url = build_results_url(&self.base_url, event_id, page);
        let response = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        debug!(event_id, page, bytes = body.len(), "received page");
        Ok(body)
    }

    /// Host this client requests pages from
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
