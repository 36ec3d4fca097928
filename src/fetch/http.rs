//! HTTP page source
//!
//! This module handles all network requests, including:
//! - Building the HTTP client with a descriptive user agent
//! - Deriving article addresses from phrases
//! - Classifying failures into "not found" and transport errors

use crate::config::{CrawlerConfig, UserAgentConfig};
use crate::fetch::PageSource;
use crate::page::Phrase;
use crate::FetchError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use wiki_harvest::config::{CrawlerConfig, UserAgentConfig};
/// use wiki_harvest::fetch::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &CrawlerConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    crawler: &CrawlerConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(crawler.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches articles from `<base>/wiki/<title>`
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PageSource for HttpSource {
    /// | Condition | Result |
    /// |-----------|--------|
    /// | HTTP 2xx | body text |
    /// | HTTP 404 | `NotFound` |
    /// | other status | `Transport` |
    /// | timeout / connect / body error | `Transport` |
    async fn fetch(&self, phrase: &Phrase) -> Result<String, FetchError> {
        let url = phrase.address(&self.base_url);
        tracing::debug!(%url, "Fetching article");

        let response = self.client.get(&url).send().await.map_err(|e| {
            let message = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                e.to_string()
            };
            FetchError::Transport {
                target: url.clone(),
                message,
            }
        })?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound { target: url });
        }

        if !status.is_success() {
            return Err(FetchError::Transport {
                target: url,
                message: format!("HTTP {}", status.as_u16()),
            });
        }

        response.text().await.map_err(|e| FetchError::Transport {
            target: url,
            message: e.to_string(),
        })
    }
}
