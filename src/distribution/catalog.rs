//! Field catalogs for synthesized log lines
//!
//! The standard catalog mirrors traffic on a small blog: equal-weighted
//! browser user agents, a handful of article and tag paths, and a response
//! mix dominated by successful HTML pages.

use super::weighted::WeightedDistribution;
use crate::config::{FieldEntry, FieldsConfig};
use anyhow::{Context, Result};

const USER_AGENTS: &[(&str, u32)] = &[
    ("Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.2; Win64; x64; Trident/6.0)", 12),
    ("Mozilla/5.0 (compatible; MSIE 9.0; Windows NT 6.1; Trident/5.0)", 12),
    ("Mozilla/5.0 (iPhone; CPU iPhone OS 8_1 like Mac OS X) AppleWebKit/600.1.4 (KHTML, like Gecko) Version/8.0 Mobile/12B410 Safari/600.1.4", 12),
    ("Mozilla/5.0 (Macintosh; Intel Mac OS X 10.9; rv:23.0) Gecko/20100101 Firefox/23.0", 12),
    ("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_9_0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/29.0.1547.57 Safari/537.36", 12),
];

const PATHS: &[(&str, u32)] = &[
    ("/articles/bosun/", 5),
    ("/articles/datapower-static-routes/", 5),
    ("/articles/google-code-jam/", 5),
    ("/articles/chess-board-in-objective-c/", 10),
    ("/articles/array-processing-in-ruby/", 8),
    ("/tags/datapower/", 10),
    ("/tags/open-source/", 10),
    ("/tags/ruby/", 5),
    ("/tags/python/", 10),
];

const FILES: &[(&str, u32)] = &[("header", 5), ("list", 4), ("item", 3)];

const EXTENSIONS: &[(&str, u32)] = &[("html", 70), ("png", 15), ("gif", 10), ("css", 5)];

const STATUS_CODES: &[(u16, u32)] = &[(200, 86), (302, 6), (404, 5), (503, 3)];

/// The weighted tables a log line is assembled from
#[derive(Debug, Clone)]
pub struct FieldCatalog {
    pub user_agents: WeightedDistribution<String>,
    pub paths: WeightedDistribution<String>,
    pub files: WeightedDistribution<String>,
    pub extensions: WeightedDistribution<String>,
    pub status_codes: WeightedDistribution<u16>,
}

impl FieldCatalog {
    /// The reference tables
    pub fn standard() -> Self {
        Self {
            user_agents: static_strings(USER_AGENTS),
            paths: static_strings(PATHS),
            files: static_strings(FILES),
            extensions: static_strings(EXTENSIONS),
            status_codes: static_table(STATUS_CODES),
        }
    }

    /// The reference tables with any configured overrides applied
    pub fn from_config(fields: &FieldsConfig) -> Result<Self> {
        let mut catalog = Self::standard();

        if let Some(ref entries) = fields.user_agents {
            catalog.user_agents = from_entries(entries).context("Invalid user_agents table")?;
        }
        if let Some(ref entries) = fields.paths {
            catalog.paths = from_entries(entries).context("Invalid paths table")?;
        }
        if let Some(ref entries) = fields.files {
            catalog.files = from_entries(entries).context("Invalid files table")?;
        }
        if let Some(ref entries) = fields.extensions {
            catalog.extensions = from_entries(entries).context("Invalid extensions table")?;
        }
        if let Some(ref entries) = fields.status_codes {
            catalog.status_codes = from_entries(entries).context("Invalid status_codes table")?;
        }

        Ok(catalog)
    }
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn static_strings(table: &[(&str, u32)]) -> WeightedDistribution<String> {
    let entries = table.iter().map(|&(value, weight)| (value.to_string(), weight));
    match WeightedDistribution::new(entries) {
        Ok(dist) => dist,
        Err(e) => unreachable!("built-in table is well-formed: {}", e),
    }
}

fn static_table<T: Copy>(table: &[(T, u32)]) -> WeightedDistribution<T> {
    match WeightedDistribution::new(table.iter().copied()) {
        Ok(dist) => dist,
        Err(e) => unreachable!("built-in table is well-formed: {}", e),
    }
}

fn from_entries<T: Clone>(entries: &[FieldEntry<T>]) -> Result<WeightedDistribution<T>> {
    let pairs = entries.iter().map(|e| (e.value.clone(), e.weight));
    Ok(WeightedDistribution::new(pairs)?)
}
