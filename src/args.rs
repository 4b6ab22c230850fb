use clap::Parser;
use link_scraper::{ScrapeError, ScraperConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "link-scraper")]
#[command(about = "Fetches a list of pages and saves every absolute link on them as a sorted JSON array")]
#[command(version)]
pub struct Args {
    /// Pages to fetch, in order
    pub seed_urls: Vec<String>,

    /// File the sorted links are written to (overwritten each run)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a JSON scraper configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Resolve relative hrefs against the page URL when the page has no <base>
    #[arg(long)]
    pub resolve_relative: bool,
}

/// Default output file when neither the command line nor a config file names one
const DEFAULT_OUTPUT: &str = "links.json";

impl Args {
    /// Build the scraper configuration, letting command-line values override the file's
    pub fn into_config(self) -> Result<ScraperConfig, ScrapeError> {
        let mut config = match &self.config {
            Some(path) => ScraperConfig::from_file(path)?,
            None => ScraperConfig::new(DEFAULT_OUTPUT, Vec::new()),
        };

        if let Some(output) = self.output {
            config.output_path = output;
        }
        if !self.seed_urls.is_empty() {
            config.seed_urls = self.seed_urls;
        }
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(ScrapeError::Config("--timeout must be positive".into()));
            }
            config.timeout_secs = timeout;
        }
        if self.resolve_relative {
            config.resolve_relative_links = true;
        }

        Ok(config)
    }
}
