use thiserror::Error;

/// Errors raised while fetching a single page
#[derive(Error, Debug)]
pub enum FetchError {
    /// The seed string is not a URL reqwest can request
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The server answered with a non-success status
    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),

    /// Transport, timeout or body decoding failure
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The HTTP client itself could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Errors that can surface inside a scraping run or while loading configuration
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}
