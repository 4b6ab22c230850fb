// Re-export modules
pub mod config;
pub mod crawlers;
pub mod error;
pub mod logging;
pub mod parsers;
pub mod results;
pub mod storage;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use crawlers::web::{LinkScraper, is_valid_url};
pub use error::{FetchError, ScrapeError};
pub use logging::{LogLogger, Logger, MemoryLogger};
pub use parsers::Document;
pub use results::{LinkSet, RunSummary};
