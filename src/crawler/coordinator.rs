//! Crawler coordinator - breadth-first word-count crawl
//!
//! Each step takes the oldest queued page and runs it through:
//! - fetching the raw HTML from the page source
//! - locating the content region and counting its words
//! - merging the counts into the persistent store
//! - queueing the page's unseen internal links one level deeper
//!
//! A page that fails at any stage is logged and skipped; its links are not
//! followed. The crawl ends when the queue is empty or it is cancelled.

use crate::crawler::CrawlState;
use crate::extract::{internal_links, ExtractError};
use crate::fetch::PageSource;
use crate::frequency::{count_words, FrequencyStore, WordFrequencyMap};
use crate::page::{ContentLocator, Document, Phrase};
use crate::WikiError;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// Outcome of a finished or cancelled crawl
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    /// Pages whose counts were merged, in processing order, with their depth
    pub processed: Vec<(Phrase, u32)>,

    /// Pages that failed, with the reason
    pub failures: Vec<(Phrase, String)>,

    /// Internal links found on processed pages, duplicates included
    pub links_seen: usize,

    /// Distinct pages ever queued
    pub pages_discovered: usize,

    /// True when the crawl stopped before the queue ran dry
    pub cancelled: bool,
}

impl CrawlReport {
    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }
}

/// Breadth-first crawler that aggregates word counts
pub struct Crawler<'a> {
    source: &'a dyn PageSource,
    store: &'a FrequencyStore,
    locator: ContentLocator,
    max_depth: u32,
    wait: Duration,
    cancel: CancellationToken,
}

impl<'a> Crawler<'a> {
    /// Creates a crawler with depth 1, a one second wait and default content markers
    pub fn new(source: &'a dyn PageSource, store: &'a FrequencyStore) -> Self {
        Self {
            source,
            store,
            locator: ContentLocator::default(),
            max_depth: 1,
            wait: Duration::from_secs(1),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_locator(mut self, locator: ContentLocator) -> Self {
        self.locator = locator;
        self
    }

    /// Links are followed from pages shallower than `max_depth`
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Pause between consecutive pages
    pub fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Token that stops the crawl at the next step boundary, fetch or pause
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Crawls outward from `start` until the frontier is exhausted
    pub async fn run(&self, start: Phrase) -> CrawlReport {
        tracing::info!(
            start = %start,
            max_depth = self.max_depth,
            wait_secs = self.wait.as_secs_f64(),
            "Starting crawl"
        );

        let started = Instant::now();
        let mut state = CrawlState::new(start);
        let mut report = CrawlReport::default();

        while let Some((phrase, depth)) = state.next() {
            if self.cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }

            tracing::info!(%phrase, depth, "Processing page");

            let fetched = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    report.cancelled = true;
                    break;
                }
                fetched = self.source.fetch(&phrase) => fetched,
            };

            let outcome = match fetched {
                Ok(html) => self.process(&html).await,
                Err(e) => Err(WikiError::from(e)),
            };

            match outcome {
                Ok(links) => {
                    report.links_seen += links.len();
                    if depth < self.max_depth {
                        let queued = links
                            .into_iter()
                            .filter(|link| state.discover(link.clone(), depth + 1))
                            .count();
                        tracing::debug!(%phrase, queued, "Queued new links");
                    }
                    report.processed.push((phrase, depth));
                }
                Err(e) => {
                    tracing::warn!(%phrase, depth, "Skipping page: {}", e);
                    report.failures.push((phrase, e.to_string()));
                }
            }

            if state.is_empty() {
                continue;
            }

            tracing::debug!(pending = state.pending(), "Waiting {:?} before next page", self.wait);
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    report.cancelled = true;
                    break;
                }
                _ = tokio::time::sleep(self.wait) => {}
            }
        }

        report.pages_discovered = state.visited_count();

        if report.cancelled {
            tracing::warn!(
                processed = report.processed_count(),
                pending = state.pending(),
                "Crawl cancelled"
            );
        } else {
            tracing::info!(
                processed = report.processed_count(),
                failed = report.failed_count(),
                elapsed_secs = started.elapsed().as_secs_f64(),
                "Crawl complete"
            );
        }

        report
    }

    /// Counts and stores the words of one page, returning its links
    async fn process(&self, html: &str) -> Result<Vec<Phrase>, WikiError> {
        let (counts, links) = self.harvest(html)?;
        let totals = self.store.merge(&counts).await?;
        tracing::debug!(
            words = counts.total(),
            unique_words = totals.len(),
            "Stored word counts"
        );
        Ok(links)
    }

    /// Parses a page and reads everything the crawl needs from it
    ///
    /// The parsed tree is dropped before returning so no await ever holds it.
    fn harvest(&self, html: &str) -> Result<(WordFrequencyMap, Vec<Phrase>), ExtractError> {
        let doc = Document::parse(html);
        let region = self
            .locator
            .locate(&doc)
            .ok_or(ExtractError::ContentNotFound)?;
        Ok((count_words(&region), internal_links(&region)))
    }
}
