use log::Level;
use std::sync::Mutex;

/// Sink for the human-readable progress and failure lines a scraper emits.
///
/// The scraper holds one behind an `Arc`, so callers decide where output goes:
/// [`LogLogger`] hands everything to the `log` facade, [`MemoryLogger`] keeps
/// the lines for later inspection.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards every line to the `log` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct LogLogger;

impl Logger for LogLogger {
    fn info(&self, message: &str) {
        ::log::info!(target: "link_scraper", "{}", message);
    }

    fn warn(&self, message: &str) {
        ::log::warn!(target: "link_scraper", "{}", message);
    }

    fn error(&self, message: &str) {
        ::log::error!(target: "link_scraper", "{}", message);
    }
}

/// Records lines in memory, in the order they were logged
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines with their level
    pub fn lines(&self) -> Vec<(Level, String)> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Recorded messages at the given level
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }

    /// True if any recorded message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|(_, message)| message.contains(needle))
    }

    fn push(&self, level: Level, message: &str) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.push((level, message.to_string()));
    }
}

impl Logger for MemoryLogger {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_keeps_order_and_level() {
        let logger = MemoryLogger::new();
        logger.info("Fetching: https://example.com/");
        logger.error("Failed to fetch page: https://example.com/");
        logger.warn("Invalid document. Skipping link extraction.");

        let lines = logger.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].0, Level::Info);
        assert_eq!(lines[1].0, Level::Error);
        assert_eq!(lines[2].0, Level::Warn);

        assert_eq!(
            logger.messages(Level::Error),
            vec!["Failed to fetch page: https://example.com/".to_string()]
        );
        assert!(logger.contains("Skipping link extraction"));
        assert!(!logger.contains("Scraping completed"));
    }
}
