//! Results grid parser
//!
//! Parses one results page and extracts a [`RaceResult`] per data row.
//! The grid is an ASP.NET table inside `div#ctl00_Content_Main_divGrid`
//! whose first row holds the column headings.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::country::{CountryTable, country_token};
use crate::error::{RaceResultsError, Result};
use crate::types::{RaceResult, UNKNOWN_COUNTRY};

/// Selector for the grid container; its absence marks the end of pagination
pub const RESULTS_CONTAINER: &str = "div#ctl00_Content_Main_divGrid";

/// Number of cells in every data row
pub const CELL_COUNT: usize = 12;

/// Positions of the grid cells that are read
///
/// Indices 0, 5, 8 and 11 hold nothing we export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    BibNumber = 1,
    Position = 2,
    Gender = 3,
    GenderPosition = 4,
    Country = 6,
    Name = 7,
    Time = 9,
    Category = 10,
}

impl Column {
    pub fn index(self) -> usize {
        self as usize
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| RaceResultsError::ParseError(format!("Invalid selector {css:?}: {e:?}")))
}

/// Parses a results page into records for `event_name`
///
/// # Arguments
/// * `html` - Raw HTML of the results page
/// * `event_name` - Event label written into every record
/// * `countries` - Table used to resolve flag tokens
/// * `page` - Page number, used in error messages
///
/// # Returns
/// Records in page order. Empty if the grid container is missing or the
/// grid only has its heading row.
///
/// # Errors
/// - `ElementNotFound` if the container holds no table
/// - `MalformedRow` if a data row does not have exactly 12 cells
/// - `InvalidBibNumber` if a bib cell is not an integer
pub fn parse_results_page(
    html: &str,
    event_name: &str,
    countries: &CountryTable,
    page: u32,
) -> Result<Vec<RaceResult>> {
    let document = Html::parse_document(html);

    let container_selector = selector(RESULTS_CONTAINER)?;
    let Some(container) = document.select(&container_selector).next() else {
        debug!(page, "no results container");
        return Ok(Vec::new());
    };

    let table_selector = selector("table")?;
    let row_selector = selector("tr")?;
    let cell_selector = selector("td, th")?;
    let img_selector = selector("img")?;

    let table = container
        .select(&table_selector)
        .next()
        .ok_or_else(|| RaceResultsError::ElementNotFound("results table".to_string()))?;

    let mut results = Vec::new();

    // First row is headings
    for (i, row) in table.select(&row_selector).enumerate().skip(1) {
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
        if cells.len() != CELL_COUNT {
            return Err(RaceResultsError::MalformedRow {
                page,
                row: i,
                expected: CELL_COUNT,
                found: cells.len(),
            });
        }

        let bib_text = cell_text(&cells[Column::BibNumber.index()]);
        let bib_number = bib_text
            .parse::<u32>()
            .map_err(|_| RaceResultsError::InvalidBibNumber {
                row: i,
                value: bib_text.clone(),
            })?;

        let country = resolve_country(&cells[Column::Country.index()], &img_selector, countries);

        results.push(RaceResult {
            event_name: event_name.to_string(),
            bib_number,
            gender: cell_text(&cells[Column::Gender.index()]),
            country,
            name: cell_text(&cells[Column::Name.index()]),
            time: cell_text(&cells[Column::Time.index()]),
            category: cell_text(&cells[Column::Category.index()]),
        });
    }

    debug!(page, rows = results.len(), "parsed results page");
    Ok(results)
}

/// All text inside a cell, trimmed
fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Resolves the flag image in a country cell, falling back to "Unknown"
fn resolve_country(cell: &ElementRef, img_selector: &Selector, countries: &CountryTable) -> String {
    let token = cell
        .select(img_selector)
        .next()
        .and_then(|img| img.value().attr("src"))
        .and_then(country_token);

    match token.map(|t| (t, countries.lookup(t))) {
        Some((_, Ok(name))) => name.to_string(),
        Some((t, Err(_))) => {
            debug!(token = t, "unmapped country token");
            UNKNOWN_COUNTRY.to_string()
        }
        None => UNKNOWN_COUNTRY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const HEADER: &str = "<tr><th></th><th>Bib</th><th>Pos</th><th>Gender</th><th>G/Pos</th>\
        <th></th><th>Country</th><th>Name</th><th></th><th>Time</th><th>Category</th><th></th></tr>";

    fn row(bib: &str, gender: &str, flag: &str, name: &str, time: &str, category: &str) -> String {
        format!(
            "<tr><td></td><td>{bib}</td><td>1</td><td>{gender}</td><td>1</td><td></td>\
             <td>{flag}</td><td>{name}</td><td></td><td>{time}</td><td>{category}</td><td></td></tr>"
        )
    }

    fn page(rows: &[String]) -> String {
        format!(
            "<html><body><div id=\"ctl00_Content_Main_divGrid\"><table>{}{}</table></div></body></html>",
            HEADER,
            rows.concat()
        )
    }

    fn flag(token: &str) -> String {
        format!("<img src=\"/images/flags/{token}.gif\" alt=\"\">")
    }

    #[test]
    fn test_missing_container_is_empty() {
        let html = "<html><body><p>No results</p></body></html>";
        let results = parse_results_page(html, "Marathon", &CountryTable::iso3166(), 9).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_header_only_is_empty() {
        let html = page(&[]);
        let results = parse_results_page(&html, "Marathon", &CountryTable::iso3166(), 1).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_parse_single_row() {
        let html = page(&[row("1042", "Female", &flag("aus"), " Jane Citizen ", "03:05:12", "F35-39")]);
        let results = parse_results_page(&html, "Marathon", &CountryTable::iso3166(), 1).unwrap();

        assert_eq!(
            results,
            vec![RaceResult {
                event_name: "Marathon".to_string(),
                bib_number: 1042,
                gender: "Female".to_string(),
                country: "Australia".to_string(),
                name: "Jane Citizen".to_string(),
                time: "03:05:12".to_string(),
                category: "F35-39".to_string(),
            }]
        );
    }

    #[test]
    fn test_rows_keep_page_order() {
        let html = page(&[
            row("7", "Male", &flag("ken"), "First", "02:10:01", "Open"),
            row("3", "Male", &flag("eth"), "Second", "02:10:30", "Open"),
            row("12", "Female", &flag("jpn"), "Third", "02:25:44", "Open"),
        ]);
        let results = parse_results_page(&html, "Marathon", &CountryTable::iso3166(), 1).unwrap();

        let bibs: Vec<u32> = results.iter().map(|r| r.bib_number).collect();
        assert_eq!(bibs, vec![7, 3, 12]);
        assert_eq!(results[1].country, "Ethiopia");
    }

    #[test]
    fn test_unmapped_country_is_unknown() {
        let html = page(&[row("5", "Male", &flag("zzz"), "Someone", "01:00:00", "Open")]);
        let results = parse_results_page(&html, "5km", &CountryTable::iso3166(), 1).unwrap();
        assert_eq!(results[0].country, UNKNOWN_COUNTRY);
    }

    #[test]
    fn test_blank_country_cell_is_unknown() {
        let html = page(&[row("5", "Male", "&nbsp;", "Someone", "01:00:00", "Open")]);
        let results = parse_results_page(&html, "5km", &CountryTable::iso3166(), 1).unwrap();
        assert_eq!(results[0].country, UNKNOWN_COUNTRY);
    }

    #[test]
    fn test_substitute_country_table() {
        let countries = CountryTable::from_pairs([("aus", "Straya")]);
        let html = page(&[row("5", "Male", &flag("aus"), "Someone", "01:00:00", "Open")]);
        let results = parse_results_page(&html, "5km", &countries, 1).unwrap();
        assert_eq!(results[0].country, "Straya");
    }

    #[test]
    fn test_wrong_cell_count_is_malformed() {
        let short = "<tr><td></td><td>1</td><td>1</td></tr>".to_string();
        let html = page(&[row("5", "Male", &flag("aus"), "Someone", "01:00:00", "Open"), short]);
        let result = parse_results_page(&html, "Marathon", &CountryTable::iso3166(), 4);

        match result {
            Err(RaceResultsError::MalformedRow { page, row, expected, found }) => {
                assert_eq!(page, 4);
                assert_eq!(row, 2);
                assert_eq!(expected, 12);
                assert_eq!(found, 3);
            }
            other => panic!("Expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_bib_is_error() {
        let html = page(&[row("A12", "Male", &flag("aus"), "Someone", "01:00:00", "Open")]);
        let result = parse_results_page(&html, "Marathon", &CountryTable::iso3166(), 1);

        match result {
            Err(RaceResultsError::InvalidBibNumber { row, value }) => {
                assert_eq!(row, 1);
                assert_eq!(value, "A12");
            }
            other => panic!("Expected InvalidBibNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_container_without_table() {
        let html = "<div id=\"ctl00_Content_Main_divGrid\"><p>loading</p></div>";
        let result = parse_results_page(html, "Marathon", &CountryTable::iso3166(), 1);
        assert!(matches!(result, Err(RaceResultsError::ElementNotFound(_))));
    }

    #[test]
    fn test_column_indices() {
        assert_eq!(Column::BibNumber.index(), 1);
        assert_eq!(Column::Country.index(), 6);
        assert_eq!(Column::Category.index(), 10);
        assert!(Column::Category.index() < CELL_COUNT);
    }

    proptest! {
        #[test]
        fn prop_bib_number_round_trips(bib in any::<u32>()) {
            let html = page(&[row(&bib.to_string(), "Male", &flag("aus"), "Runner", "01:00:00", "Open")]);
            let results = parse_results_page(&html, "Marathon", &CountryTable::iso3166(), 1).unwrap();
            prop_assert_eq!(results.len(), 1);
            prop_assert_eq!(results[0].bib_number, bib);
        }
    }
}
