use crate::fetch::PageSource;
use crate::page::Phrase;
use crate::FetchError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Serves one local HTML file regardless of the phrase asked for
///
/// Used for offline runs where the article was saved beforehand.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PageSource for FileSource {
    async fn fetch(&self, phrase: &Phrase) -> Result<String, FetchError> {
        tracing::debug!(%phrase, path = %self.path.display(), "Reading article from file");

        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            let target = self.path.display().to_string();
            if e.kind() == ErrorKind::NotFound {
                FetchError::NotFound { target }
            } else {
                FetchError::Transport {
                    target,
                    message: e.to_string(),
                }
            }
        })?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
