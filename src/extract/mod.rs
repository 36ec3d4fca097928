//! Content extraction from a located article region

mod links;
mod summary;
mod table;

pub use links::internal_links;
pub use summary::summarize;
pub use table::{
    extract_table, StructuredTable, TableExtraction, TableExtractor, ValueFrequency, MAX_COLSPAN,
    MAX_ROWSPAN,
};

use thiserror::Error;

/// Errors that can occur while extracting content from a page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("Content region not found")]
    ContentNotFound,

    #[error("Table {requested} requested but the page has {available} tables")]
    IndexOutOfRange { requested: usize, available: usize },

    #[error("Malformed table: {0}")]
    MalformedTable(String),
}
