//! Article retrieval
//!
//! A [`PageSource`] turns a phrase into raw HTML. The crate ships a network
//! source ([`HttpSource`]) and an offline one ([`FileSource`]); tests plug in
//! their own.

mod file;
mod http;

pub use file::FileSource;
pub use http::{build_http_client, HttpSource};

use crate::page::{Document, Phrase};
use crate::FetchError;
use async_trait::async_trait;

/// Trait for article sources (to allow mocking)
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Returns the raw HTML of the article named by `phrase`
    async fn fetch(&self, phrase: &Phrase) -> Result<String, FetchError>;
}

/// Fetches an article and parses it
///
/// Parsing happens after the last await so the returned [`Document`] never
/// lives inside a suspended future.
pub async fn load_document(
    source: &dyn PageSource,
    phrase: &Phrase,
) -> Result<Document, FetchError> {
    let html = source.fetch(phrase).await?;
    Ok(Document::parse(&html))
}
