//! Relative word-frequency analysis
//!
//! Compares the aggregated article word counts with the frequencies of a
//! general-language corpus.

mod compare;
mod corpus;

pub use compare::{analyze, AnalysisMode, FrequencyComparison};
pub use corpus::{CorpusError, EmptyCorpus, JsonCorpus, LanguageCorpus};
