//! Country lookup for flag image tokens
//!
//! The results grid shows a flag image per finisher whose filename stem is a
//! lowercase ISO 3166-1 alpha-3 code (e.g. `/images/flags/aus.gif`).

mod iso3166;

use std::collections::HashMap;

use crate::error::{RaceResultsError, Result};

/// Immutable mapping from flag token to country name
///
/// Built once at startup and passed by reference to the parser.
#[derive(Debug, Clone)]
pub struct CountryTable {
    names: HashMap<String, String>,
}

impl CountryTable {
    /// Table of ISO 3166-1 alpha-3 codes
    pub fn iso3166() -> Self {
        Self::from_pairs(iso3166::ALPHA3.iter().copied())
    }

    /// Builds a table from `(token, country name)` pairs
    ///
    /// Tokens are stored lowercased.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let names = pairs
            .into_iter()
            .map(|(token, name)| (token.as_ref().to_ascii_lowercase(), name.into()))
            .collect();
        Self { names }
    }

    /// Resolves a token to its country name
    ///
    /// # Errors
    /// Returns `CountryNotFound` if the token has no entry
    pub fn lookup(&self, token: &str) -> Result<&str> {
        self.names
            .get(&token.trim().to_ascii_lowercase())
            .map(String::as_str)
            .ok_or_else(|| RaceResultsError::CountryNotFound(token.to_string()))
    }

    /// Number of tokens in the table
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for CountryTable {
    fn default() -> Self {
        Self::iso3166()
    }
}

/// Extracts the country token from a flag image reference
///
/// Takes the last path segment and keeps the text before its first `.`,
/// so `../images/flags/aus.gif` yields `aus`. Query strings and fragments
/// are ignored. Returns `None` when nothing is left.
pub fn country_token(src: &str) -> Option<&str> {
    let path = src.split(['?', '#']).next().unwrap_or(src);
    let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let stem = file.split('.').next().unwrap_or(file).trim();

    if stem.is_empty() { None } else { Some(stem) }
}
