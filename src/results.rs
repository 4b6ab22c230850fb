use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Deduplicated collection of absolute links discovered during one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSet {
    links: BTreeSet<String>,
}

impl LinkSet {
    /// Create an empty link set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a link, returning false if it was already present
    pub fn insert(&mut self, link: impl Into<String>) -> bool {
        self.links.insert(link.into())
    }

    pub fn contains(&self, link: &str) -> bool {
        self.links.contains(link)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Consume the set, yielding its members in ascending byte order
    pub fn into_sorted_vec(self) -> Vec<String> {
        self.links.into_iter().collect()
    }
}

impl Extend<String> for LinkSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.links.extend(iter);
    }
}

impl FromIterator<String> for LinkSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            links: iter.into_iter().collect(),
        }
    }
}

/// What happened during a scraping run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of seed URLs configured
    pub seeds: usize,

    /// Seeds that were fetched and parsed
    pub pages_fetched: usize,

    /// Seeds that could not be fetched
    pub pages_failed: usize,

    /// Unique links written to the output
    pub links: usize,

    /// Whether the output file was written
    pub output_written: bool,
}

impl RunSummary {
    pub fn new(seeds: usize) -> Self {
        Self {
            seeds,
            ..Self::default()
        }
    }
}
