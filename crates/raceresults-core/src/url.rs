//! URL helper functions for the results host
//!
//! Builds results page URLs for the fixed competition and race.

/// Results host serving the competition
pub const BASE_URL: &str = "https://results.sportseventservices.com.au";

/// Competition identifier (`CId` query parameter)
pub const COMPETITION_ID: u32 = 16287;

/// Race identifier (`RId` query parameter)
pub const RACE_ID: u32 = 6373;

/// Builds the path and query for one page of an event's results
///
/// # Example
/// ```
/// use raceresults_core::url::build_results_path;
/// let path = build_results_path(1, 2);
/// assert_eq!(path, "/results.aspx?CId=16287&RId=6373&EId=1&dt=0&PageNo=2");
/// ```
pub fn build_results_path(event_id: u32, page: u32) -> String {
    format!(
        "/results.aspx?CId={}&RId={}&EId={}&dt=0&PageNo={}",
        COMPETITION_ID, RACE_ID, event_id, page
    )
}

/// Builds the full results page URL against the given host
///
/// A trailing slash on `base_url` is ignored.
///
/// # Example
/// ```
/// use raceresults_core::url::{build_results_url, BASE_URL};
/// let url = build_results_url(BASE_URL, 4, 1);
/// assert_eq!(
///     url,
///     "https://results.sportseventservices.com.au/results.aspx?CId=16287&RId=6373&EId=4&dt=0&PageNo=1"
/// );
/// ```
pub fn build_results_url(base_url: &str, event_id: u32, page: u32) -> String {
    format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        build_results_path(event_id, page)
    )
}
