use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure for wiki-harvest
///
/// Every section is optional in the TOML file; missing sections fall back to
/// the defaults below, so running without a config file is the same as
/// loading an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Where articles come from and how the article body is recognized
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Base address of the wiki, without the `/wiki/` suffix
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Class of the `div` holding the article body
    #[serde(rename = "content-class")]
    pub content_class: String,

    /// Id of the `div` used when no element carries `content_class`
    #[serde(rename = "content-id")]
    pub content_id: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://bulbapedia.bulbagarden.net".to_string(),
            content_class: "mw-parser-output".to_string(),
            content_id: "mw-content-text".to_string(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "wiki-harvest".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://github.com/wiki-harvest/wiki-harvest".to_string(),
            contact_email: "wiki-harvest@example.com".to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the user agent header value
    ///
    /// Format: `CrawlerName/Version (+ContactURL; ContactEmail)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{}; {})",
            self.crawler_name, self.crawler_version, self.contact_url, self.contact_email
        )
    }
}

/// Recursive word count behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of link hops from the start phrase
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Pause between two page fetches, in seconds
    #[serde(rename = "wait-seconds")]
    pub wait_seconds: f64,

    /// Total timeout for a single HTTP request, in seconds
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: 1,
            wait_seconds: 1.0,
            request_timeout_secs: 30,
        }
    }
}

impl CrawlerConfig {
    /// The pacing delay as a `Duration`
    ///
    /// Validation guarantees `wait_seconds` is finite and non-negative.
    pub fn wait(&self) -> Duration {
        Duration::from_secs_f64(self.wait_seconds.max(0.0))
    }
}

/// Output locations
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// JSON file accumulating word counts across runs
    #[serde(rename = "word-counts-path")]
    pub word_counts_path: PathBuf,

    /// Directory receiving `<phrase>.csv` table exports
    #[serde(rename = "table-dir")]
    pub table_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            word_counts_path: PathBuf::from("word-counts.json"),
            table_dir: PathBuf::from("."),
        }
    }
}

/// Relative frequency analysis settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// JSON object mapping words to their general-language frequency
    #[serde(rename = "corpus-path")]
    pub corpus_path: Option<PathBuf>,

    /// ISO code of the corpus language, shown in reports
    pub language: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            corpus_path: None,
            language: "en".to_string(),
        }
    }
}
