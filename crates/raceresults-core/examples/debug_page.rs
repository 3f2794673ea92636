//! Debug script to inspect one results page
//!
//! Run with: cargo run --example debug_page -p raceresults-core -- <event id> <page>

use raceresults_core::{CountryTable, ResultsClient, parse_results_page};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let event_id: u32 = args.next().unwrap_or_else(|| "1".to_string()).parse()?;
    let page: u32 = args.next().unwrap_or_else(|| "1".to_string()).parse()?;

    let client = ResultsClient::new()?;
    let html = client.fetch_page(event_id, page).await?;

    std::fs::write("debug_page.html", &html)?;
    println!("HTML saved to debug_page.html ({} bytes)", html.len());

    let results = parse_results_page(&html, "debug", &CountryTable::iso3166(), page)?;
    println!("Parsed {} results:\n", results.len());
    for result in results.iter().take(10) {
        println!(
            "{:>6}  {:<30} {:<8} {:<20} {} {}",
            result.bib_number, result.name, result.gender, result.country, result.time, result.category
        );
    }

    Ok(())
}
