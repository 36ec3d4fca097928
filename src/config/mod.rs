//! Configuration module for wiki-harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use wiki_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("wiki-harvest.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    AnalysisConfig, Config, CrawlerConfig, OutputConfig, SourceConfig, UserAgentConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
