use crate::config::ScraperConfig;
use crate::crawlers::fetch::{FetchedPage, HttpFetcher};
use crate::error::{FetchError, ScrapeError};
use crate::logging::{LogLogger, Logger};
use crate::parsers::Document;
use crate::results::{LinkSet, RunSummary};
use crate::storage;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::OnceCell;
use url::Url;

/// Returns true if `candidate` parses as a URL with a non-empty host.
///
/// This is the only admission rule for links; there is no scheme allow-list.
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok_and(|url| url.host_str().is_some_and(|host| !host.is_empty()))
}

/// Fetches a fixed list of seed pages one at a time and writes every absolute
/// link found on them, deduplicated and sorted, to a JSON file.
///
/// Nothing here aborts a run: a failed fetch skips that seed, a failed write is
/// logged, and anything else is caught once in [`LinkScraper::run`].
pub struct LinkScraper {
    config: ScraperConfig,
    logger: Arc<dyn Logger>,
    fetcher: OnceCell<HttpFetcher>,
}

impl LinkScraper {
    /// Create a scraper with default settings
    pub fn new(output_path: impl Into<PathBuf>, seed_urls: Vec<String>) -> Self {
        Self::with_config(ScraperConfig::new(output_path, seed_urls))
    }

    pub fn with_config(config: ScraperConfig) -> Self {
        Self {
            config,
            logger: Arc::new(LogLogger),
            fetcher: OnceCell::new(),
        }
    }

    /// Route progress and failure lines to `logger` instead of the `log` facade
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    pub fn output_path(&self) -> &Path {
        &self.config.output_path
    }

    pub fn seed_urls(&self) -> &[String] {
        &self.config.seed_urls
    }

    /// The HTTP client is built on first use and shared by every fetch of the run
    async fn fetcher(&self) -> Result<&HttpFetcher, FetchError> {
        self.fetcher
            .get_or_try_init(|| async { HttpFetcher::new(&self.config) })
            .await
    }

    async fn try_fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        self.fetcher().await?.fetch(url).await
    }

    /// Fetches `url` and parses the body as HTML.
    ///
    /// Failures are logged and reported as `None` so the caller can move on to
    /// the next seed.
    pub async fn fetch_page(&self, url: &str) -> Option<Document> {
        match self.try_fetch(url).await {
            Ok(page) => {
                let fallback_base = self.config.resolve_relative_links.then_some(&page.url);
                Some(Document::parse(&page.body, fallback_base))
            }
            Err(e) => {
                self.logger.error(&format!("Failed to fetch page: {}: {}", url, e));
                None
            }
        }
    }

    /// Returns every anchor href in `document` that is an absolute URL.
    ///
    /// Duplicates are kept; the run collapses them. A missing document yields
    /// an empty list.
    pub fn extract_links(&self, document: Option<&Document>) -> Vec<String> {
        let Some(document) = document else {
            self.logger.warn("Invalid document. Skipping link extraction.");
            return Vec::new();
        };

        let links = document
            .hrefs()
            .into_iter()
            .filter(|href| is_valid_url(href))
            .collect::<Vec<String>>();

        ::log::debug!("Kept {} absolute links", links.len());
        links
    }

    /// See [`is_valid_url`]
    pub fn is_valid_url(&self, candidate: &str) -> bool {
        is_valid_url(candidate)
    }

    /// Reads a JSON file, yielding an empty array on any failure
    pub async fn read_json_file(&self, path: impl AsRef<Path>) -> Value {
        storage::read_json_file(path).await
    }

    /// Writes `value` as pretty-printed JSON, overwriting `path`.
    ///
    /// A failure is logged and swallowed; the return value says whether the
    /// file was written.
    pub async fn write_json_file<T>(&self, path: impl AsRef<Path>, value: &T) -> bool
    where
        T: Serialize + ?Sized,
    {
        let path = path.as_ref();
        match storage::write_json_file(path, value).await {
            Ok(()) => true,
            Err(e) => {
                self.logger.error(&format!(
                    "Failed to write file: {}: {}",
                    path.display(),
                    e
                ));
                false
            }
        }
    }

    /// Runs the whole pipeline once: fetch every seed, collect links, write them out.
    ///
    /// Never fails. The returned summary and the output file are the only
    /// observable results.
    pub async fn run(&self) -> RunSummary {
        let mut summary = RunSummary::new(self.config.seed_urls.len());

        if let Err(e) = self.scrape(&mut summary).await {
            self.logger.error(&format!(
                "An error occurred during the scraping process: {}",
                e
            ));
        }

        summary
    }

    async fn scrape(&self, summary: &mut RunSummary) -> Result<(), ScrapeError> {
        self.fetcher().await?;

        let mut all_links = LinkSet::new();
        for url in &self.config.seed_urls {
            self.logger.info(&format!("Fetching: {}", url));
            match self.fetch_page(url).await {
                Some(document) => {
                    summary.pages_fetched += 1;
                    self.logger.info(&format!("Extracting links from: {}", url));
                    all_links.extend(self.extract_links(Some(&document)));
                }
                None => summary.pages_failed += 1,
            }
        }

        summary.links = all_links.len();
        let sorted_links = all_links.into_sorted_vec();
        summary.output_written = self
            .write_json_file(&self.config.output_path, &sorted_links)
            .await;

        self.logger.info(&format!(
            "Scraping completed. Links saved to '{}'.",
            self.config.output_path.display()
        ));
        Ok(())
    }
}
