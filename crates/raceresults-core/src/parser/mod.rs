//! HTML parsers for the results host

pub mod results_table;

pub use results_table::{CELL_COUNT, Column, RESULTS_CONTAINER, parse_results_page};
