//! General-language word frequencies

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a corpus file
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Failed to read corpus {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse corpus {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Ranked word list of a general language
pub trait LanguageCorpus: Send + Sync {
    /// The `n` most frequent words, most frequent first
    fn top_words(&self, n: usize) -> Vec<String>;

    /// Relative frequency of `word`, 0.0 when unknown
    fn frequency(&self, word: &str) -> f64;
}

/// Corpus with no words
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCorpus;

impl LanguageCorpus for EmptyCorpus {
    fn top_words(&self, _n: usize) -> Vec<String> {
        Vec::new()
    }

    fn frequency(&self, _word: &str) -> f64 {
        0.0
    }
}

/// Corpus read from a JSON object mapping words to relative frequencies
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct JsonCorpus {
    frequencies: HashMap<String, f64>,
}

impl JsonCorpus {
    /// Loads a corpus file
    pub async fn load(path: &Path) -> Result<Self, CorpusError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CorpusError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let corpus: Self = serde_json::from_str(&raw).map_err(|source| CorpusError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), words = corpus.len(), "Corpus loaded");
        Ok(corpus)
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

impl FromIterator<(String, f64)> for JsonCorpus {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            frequencies: iter.into_iter().collect(),
        }
    }
}

impl LanguageCorpus for JsonCorpus {
    fn top_words(&self, n: usize) -> Vec<String> {
        let mut words: Vec<(&String, f64)> =
            self.frequencies.iter().map(|(w, f)| (w, *f)).collect();
        words.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        words.into_iter().take(n).map(|(w, _)| w.clone()).collect()
    }

    fn frequency(&self, word: &str) -> f64 {
        self.frequencies.get(word).copied().unwrap_or(0.0)
    }
}
