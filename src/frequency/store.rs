//! Persistent word-count aggregate
//!
//! The store is a single JSON object (word -> count) on disk. Every merge
//! reads the current file, adds the delta and writes the result to a sibling
//! temporary file that is then renamed over the target, so readers only ever
//! see a complete file.

use crate::frequency::WordFrequencyMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::Mutex;

/// Errors that can occur while reading or writing the word-count file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Word count file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode word counts: {0}")]
    Encode(#[from] serde_json::Error),
}

/// JSON-backed word-count store
///
/// Merges on one instance are serialized through an async mutex.
#[derive(Debug)]
pub struct FrequencyStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FrequencyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted counts
    ///
    /// A missing file is an empty store. A file that does not decode is
    /// logged and treated as empty; the next merge replaces it.
    pub async fn load(&self) -> Result<WordFrequencyMap, StoreError> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    /// Adds `delta` to the persisted counts and returns the new totals
    ///
    /// On a failed write the file on disk is left as it was.
    pub async fn merge(&self, delta: &WordFrequencyMap) -> Result<WordFrequencyMap, StoreError> {
        let _guard = self.lock.lock().await;

        let mut counts = self.read().await?;
        counts.merge(delta);
        self.write(&counts).await?;

        tracing::debug!(
            path = %self.path.display(),
            added = delta.total(),
            unique_words = counts.len(),
            "Word counts merged"
        );

        Ok(counts)
    }

    async fn read(&self) -> Result<WordFrequencyMap, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(WordFrequencyMap::new()),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Word count file is not valid UTF-8, starting from empty counts"
                );
                return Ok(WordFrequencyMap::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_str(&raw) {
            Ok(counts) => Ok(counts),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Word count file could not be decoded ({}), starting from empty counts",
                    e
                );
                Ok(WordFrequencyMap::new())
            }
        }
    }

    async fn write(&self, counts: &WordFrequencyMap) -> Result<(), StoreError> {
        let encoded = encode(counts)?;
        let temp = self.temp_path();

        let result = async {
            tokio::fs::write(&temp, &encoded).await?;
            tokio::fs::rename(&temp, &self.path).await
        }
        .await;

        if let Err(source) = result {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(StoreError::Io {
                path: self.path.clone(),
                source,
            });
        }

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Pretty JSON with 4-space indentation and sorted keys
fn encode(counts: &WordFrequencyMap) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    counts.sorted().serialize(&mut serializer)?;
    Ok(buf)
}
