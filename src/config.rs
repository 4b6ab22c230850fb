use crate::error::ScrapeError;
use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Configuration for a link scraping run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// File the sorted link array is written to (overwritten every run)
    pub output_path: PathBuf,

    /// Pages to fetch, in order
    #[serde(default)]
    pub seed_urls: Vec<String>,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Resolve relative hrefs against the fetched page's URL when the page has no <base>
    #[serde(default)]
    pub resolve_relative_links: bool,
}

impl ScraperConfig {
    /// Create a new configuration with default values
    pub fn new(output_path: impl Into<PathBuf>, seed_urls: Vec<String>) -> Self {
        Self {
            output_path: output_path.into(),
            seed_urls,
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            resolve_relative_links: false,
        }
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ScrapeError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ScrapeError> {
        if self.output_path.as_os_str().is_empty() {
            return Err(ScrapeError::Config("output_path must not be empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(ScrapeError::Config("timeout_secs must be positive".into()));
        }
        if HeaderValue::from_str(&self.user_agent).is_err() {
            return Err(ScrapeError::Config(format!(
                "user_agent {:?} is not a valid HTTP header value",
                self.user_agent
            )));
        }
        Ok(())
    }
}

/// Default value for user_agent
fn default_user_agent() -> String {
    format!("link-scraper/{}", env!("CARGO_PKG_VERSION"))
}

/// Default value for timeout_secs
fn default_timeout_secs() -> u64 {
    30
}

/// Default value for connect_timeout_secs
fn default_connect_timeout_secs() -> u64 {
    10
}
