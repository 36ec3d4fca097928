//! Output module for exported tables and reports
//!
//! This module handles:
//! - Exporting extracted tables as CSV
//! - Rendering tables, value counts and comparisons for the terminal
//! - Writing the relative word-frequency report as markdown

pub mod console;
mod csv;
mod markdown;

pub use csv::{write_csv, TableExporter};
pub use markdown::{format_markdown_report, generate_markdown_report};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
