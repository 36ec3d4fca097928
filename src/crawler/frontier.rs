//! Breadth-first crawl frontier
//!
//! Pages are marked visited when they are enqueued, not when they are
//! processed, so a page reachable along several paths is queued once and at
//! the depth of the first path that found it.

use crate::page::Phrase;
use std::collections::{HashSet, VecDeque};

/// FIFO queue of pending pages plus the set of every page ever queued
#[derive(Debug, Clone)]
pub struct CrawlState {
    queue: VecDeque<(Phrase, u32)>,
    visited: HashSet<Phrase>,
}

impl CrawlState {
    /// Creates a frontier holding only the start page at depth 0
    pub fn new(start: Phrase) -> Self {
        let mut state = Self {
            queue: VecDeque::new(),
            visited: HashSet::new(),
        };
        state.discover(start, 0);
        state
    }

    /// Queues `phrase` at `depth` unless it was queued before
    ///
    /// Returns true when the phrase was newly queued.
    pub fn discover(&mut self, phrase: Phrase, depth: u32) -> bool {
        if !self.visited.insert(phrase.clone()) {
            return false;
        }
        self.queue.push_back((phrase, depth));
        true
    }

    /// Takes the oldest queued page
    pub fn next(&mut self) -> Option<(Phrase, u32)> {
        self.queue.pop_front()
    }

    pub fn is_visited(&self, phrase: &Phrase) -> bool {
        self.visited.contains(phrase)
    }

    /// Pages waiting to be processed
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Pages ever queued, including processed ones
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
