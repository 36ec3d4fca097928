//! Crawler module for breadth-first word-count crawls
//!
//! This module contains:
//! - The frontier with mark-on-enqueue deduplication
//! - The crawl loop with depth limiting, pacing and cancellation

mod coordinator;
mod frontier;

pub use coordinator::{CrawlReport, Crawler};
pub use frontier::CrawlState;
