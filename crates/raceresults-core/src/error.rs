//! Error types for the race results scraper
//!
//! Every fatal condition of an export run is a variant here. A country
//! lookup miss and a missing results container are not errors at the
//! run level; they are handled inside the parser.

use thiserror::Error;

/// Error type for all race results operations
#[derive(Error, Debug)]
pub enum RaceResultsError {
    /// HTTP request failed or the server answered with a non-success status
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// A data row did not have the expected number of cells
    #[error("Malformed row {row} on page {page}: expected {expected} cells, found {found}")]
    MalformedRow {
        page: u32,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The bib number cell did not hold an integer
    #[error("Invalid bib number in row {row}: {value:?}")]
    InvalidBibNumber { row: usize, value: String },

    /// Expected HTML element was not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Country token has no entry in the lookup table
    #[error("Country not found: {0}")]
    CountryNotFound(String),

    /// Pagination did not terminate within the configured ceiling
    #[error("Event {event} still had results after {limit} pages")]
    PageLimitExceeded { event: String, limit: u32 },

    /// Writing the output file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing results failed
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for race results operations
pub type Result<T> = std::result::Result<T, RaceResultsError>;
