//! wiki-harvest: summaries, tables and word statistics from wiki articles
//!
//! This crate fetches MediaWiki-style articles, extracts a summary paragraph,
//! individual tables and word frequencies from the article body, and can crawl
//! the article's internal links breadth-first while aggregating word counts
//! into a persistent JSON file.

pub mod analysis;
pub mod config;
pub mod crawler;
pub mod extract;
pub mod fetch;
pub mod frequency;
pub mod output;
pub mod page;

use thiserror::Error;

/// Errors that stop one article from being processed
#[derive(Debug, Error)]
pub enum WikiError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Extraction error: {0}")]
    Extract(#[from] extract::ExtractError),

    #[error("Word count store error: {0}")]
    Store(#[from] frequency::StoreError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while retrieving an article
#[derive(Debug, Error)]
pub enum FetchError {
    /// The remote page answered 404, or the local file does not exist
    #[error("Page not found: {target}")]
    NotFound { target: String },

    /// Any other network or filesystem failure
    #[error("Failed to fetch {target}: {message}")]
    Transport { target: String, message: String },
}

impl FetchError {
    /// Returns true if the page or file simply does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for wiki-harvest operations
pub type Result<T> = std::result::Result<T, WikiError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlReport, CrawlState, Crawler};
pub use extract::{extract_table, internal_links, summarize, StructuredTable, ValueFrequency};
pub use frequency::{count_words, FrequencyStore, WordFrequencyMap};
pub use page::{ContentLocator, Document, Phrase, Region};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_errors_convert_into_wiki_error() {
        let fetch: WikiError = FetchError::NotFound {
            target: "https://wiki.example.org/wiki/Missingno".to_string(),
        }
        .into();
        assert!(matches!(fetch, WikiError::Fetch(ref e) if e.is_not_found()));

        let extract: WikiError = extract::ExtractError::ContentNotFound.into();
        assert_eq!(
            extract.to_string(),
            "Extraction error: Content region not found"
        );

        let store: WikiError = frequency::StoreError::Io {
            path: "word-counts.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert_eq!(
            store.to_string(),
            "Word count store error: Word count file word-counts.json: denied"
        );
    }
}
