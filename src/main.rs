//! wiki-harvest main entry point
//!
//! This is the command-line interface for the wiki-harvest article scraper.

use anyhow::Context;
use clap::{ArgGroup, Parser};
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use wiki_harvest::analysis::{analyze, AnalysisMode, EmptyCorpus, JsonCorpus, LanguageCorpus};
use wiki_harvest::config::{load_config_with_hash, validate, Config};
use wiki_harvest::extract::{summarize, ExtractError, TableExtractor};
use wiki_harvest::fetch::{build_http_client, FileSource, HttpSource, PageSource};
use wiki_harvest::frequency::{count_words, FrequencyStore};
use wiki_harvest::output::{console, generate_markdown_report, TableExporter};
use wiki_harvest::page::{ContentLocator, Document, Phrase};
use wiki_harvest::{Crawler, FetchError};

/// wiki-harvest: summaries, tables and word statistics from wiki articles
///
/// Fetches articles from a MediaWiki site, prints their summary, extracts
/// tables to CSV, counts words into a shared JSON file (optionally crawling
/// linked articles) and compares the collected counts with general language.
#[derive(Parser, Debug)]
#[command(name = "wiki-harvest")]
#[command(version)]
#[command(about = "Summaries, tables and word statistics from wiki articles", long_about = None)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["summary", "table", "count_words", "auto_count_words", "analyze_relative_word_frequency"])
))]
struct Cli {
    /// Print the first paragraph of the article
    #[arg(long, value_name = "PHRASE")]
    summary: Option<String>,

    /// Extract a table from the article and save it as <PHRASE>.csv
    #[arg(long, value_name = "PHRASE")]
    table: Option<String>,

    /// Count the words of the article and add them to the word counts file
    #[arg(long, value_name = "PHRASE")]
    count_words: Option<String>,

    /// Count words across the article and the articles it links to
    #[arg(long, value_name = "PHRASE")]
    auto_count_words: Option<String>,

    /// Compare the collected word counts with general language frequencies
    #[arg(long)]
    analyze_relative_word_frequency: bool,

    /// Which table of the article to extract (1-based)
    #[arg(long, value_name = "N", default_value_t = 1)]
    number: usize,

    /// Treat the first table row as column headers
    #[arg(long)]
    first_row_is_header: bool,

    /// Read the article from a local HTML file instead of the network
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// How many link levels to follow from the start article
    #[arg(long, value_name = "D")]
    depth: Option<u32>,

    /// Seconds to wait between articles while crawling
    #[arg(long, value_name = "SECONDS")]
    wait: Option<f64>,

    /// Word list to compare: the collected articles' or the language's
    #[arg(long, value_name = "MODE", default_value = "language")]
    mode: AnalysisMode,

    /// Number of words to compare
    #[arg(long, value_name = "N", default_value_t = 10)]
    count: usize,

    /// Write the comparison as a markdown report to PATH
    #[arg(long, value_name = "PATH")]
    chart: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(depth) = cli.depth {
        config.crawler.max_depth = depth;
    }
    if let Some(wait) = cli.wait {
        config.crawler.wait_seconds = wait;
    }
    validate(&config).context("invalid settings")?;

    if let Some(phrase) = &cli.summary {
        let source = page_source(&config, cli.file.as_deref())?;
        handle_summary(&config, source.as_ref(), phrase).await;
    } else if let Some(phrase) = &cli.table {
        let source = page_source(&config, cli.file.as_deref())?;
        handle_table(&config, source.as_ref(), phrase, cli.number, cli.first_row_is_header).await;
    } else if let Some(phrase) = &cli.count_words {
        let source = page_source(&config, cli.file.as_deref())?;
        handle_count_words(&config, source.as_ref(), phrase).await;
    } else if let Some(phrase) = &cli.auto_count_words {
        if cli.file.is_some() {
            tracing::warn!("--file is ignored while crawling; linked articles come from the network");
        }
        let source = page_source(&config, None)?;
        handle_auto_count_words(&config, source.as_ref(), phrase).await;
    } else if cli.analyze_relative_word_frequency {
        handle_analysis(&config, cli.mode, cli.count, cli.chart.as_deref()).await;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("wiki_harvest=info,warn"),
            1 => EnvFilter::new("wiki_harvest=debug,info"),
            2 => EnvFilter::new("wiki_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Picks the local file source when a path was given, the wiki otherwise
fn page_source(config: &Config, file: Option<&Path>) -> anyhow::Result<Box<dyn PageSource>> {
    match file {
        Some(path) => Ok(Box::new(FileSource::new(path))),
        None => {
            let client = build_http_client(&config.user_agent, &config.crawler)
                .context("failed to build HTTP client")?;
            Ok(Box::new(HttpSource::new(client, &config.source.base_url)))
        }
    }
}

/// Parses a phrase argument, printing a diagnostic when it is blank
fn parse_phrase(raw: &str) -> Option<Phrase> {
    let phrase = Phrase::new(raw);
    if phrase.is_empty() {
        println!("Please give a non-empty phrase.");
        return None;
    }
    Some(phrase)
}

async fn fetch_page(source: &dyn PageSource, phrase: &Phrase) -> Option<String> {
    match source.fetch(phrase).await {
        Ok(html) => Some(html),
        Err(e) => {
            report_fetch_error(phrase, &e);
            None
        }
    }
}

fn report_fetch_error(phrase: &Phrase, error: &FetchError) {
    tracing::debug!(%phrase, "Fetch failed: {}", error);
    if error.is_not_found() {
        println!("Article '{}' does not exist.", phrase);
    } else {
        println!("Could not download '{}': {}", phrase, error);
    }
}

fn report_missing_content(phrase: &Phrase) {
    println!("{} for '{}'.", ExtractError::ContentNotFound, phrase);
}

/// Handles --summary: prints the first non-empty paragraph
async fn handle_summary(config: &Config, source: &dyn PageSource, raw: &str) {
    let Some(phrase) = parse_phrase(raw) else {
        return;
    };
    let Some(html) = fetch_page(source, &phrase).await else {
        return;
    };

    let doc = Document::parse(&html);
    let locator = ContentLocator::from_config(&config.source);
    let Some(region) = locator.locate(&doc) else {
        report_missing_content(&phrase);
        return;
    };

    match summarize(&region) {
        Some(summary) => println!("{}", summary),
        None => println!("No summary available."),
    }
}

/// Handles --table: prints the table and its value counts, exports CSV
async fn handle_table(
    config: &Config,
    source: &dyn PageSource,
    raw: &str,
    number: usize,
    first_row_is_header: bool,
) {
    let Some(phrase) = parse_phrase(raw) else {
        return;
    };
    let Some(html) = fetch_page(source, &phrase).await else {
        return;
    };

    let doc = Document::parse(&html);
    let locator = ContentLocator::from_config(&config.source);
    let Some(region) = locator.locate(&doc) else {
        report_missing_content(&phrase);
        return;
    };

    let extractor = TableExtractor::new(TableExporter::new(&config.output.table_dir));
    let extraction = match extractor.extract(&region, &phrase, number, first_row_is_header) {
        Ok(extraction) => extraction,
        Err(ExtractError::IndexOutOfRange {
            requested,
            available,
        }) => {
            println!(
                "Table {} not found: '{}' has {} table(s).",
                requested, phrase, available
            );
            return;
        }
        Err(e) => {
            println!("Could not read table {} of '{}': {}", number, phrase, e);
            return;
        }
    };

    print!("{}", console::format_table(&extraction.table));
    println!();

    match &extraction.export {
        Ok(path) => println!("Table saved to {}", path.display()),
        Err(e) => println!("Could not save the table: {}", e),
    }

    println!("\nValue counts:");
    print!("{}", console::format_value_counts(&extraction.values));
}

/// Handles --count-words: merges one article's counts into the store
async fn handle_count_words(config: &Config, source: &dyn PageSource, raw: &str) {
    let Some(phrase) = parse_phrase(raw) else {
        return;
    };
    let Some(html) = fetch_page(source, &phrase).await else {
        return;
    };

    let counts = {
        let doc = Document::parse(&html);
        let locator = ContentLocator::from_config(&config.source);
        match locator.locate(&doc) {
            Some(region) => count_words(&region),
            None => {
                report_missing_content(&phrase);
                return;
            }
        }
    };
    println!("Found {} unique words.", counts.len());

    let store = FrequencyStore::new(&config.output.word_counts_path);
    match store.merge(&counts).await {
        Ok(totals) => println!(
            "Updated word counts saved to {}. Total unique words: {}.",
            store.path().display(),
            totals.len()
        ),
        Err(e) => println!("Error saving word counts: {}", e),
    }
}

/// Handles --auto-count-words: crawls linked articles counting words
async fn handle_auto_count_words(config: &Config, source: &dyn PageSource, raw: &str) {
    let Some(phrase) = parse_phrase(raw) else {
        return;
    };

    let store = FrequencyStore::new(&config.output.word_counts_path);
    let cancel = CancellationToken::new();

    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, stopping crawl");
            interrupt.cancel();
        }
    });

    let crawler = Crawler::new(source, &store)
        .with_locator(ContentLocator::from_config(&config.source))
        .with_max_depth(config.crawler.max_depth)
        .with_wait(config.crawler.wait())
        .with_cancellation(cancel);

    let report = crawler.run(phrase).await;

    println!(
        "Processed {} article(s), {} failed, {} discovered.",
        report.processed_count(),
        report.failed_count(),
        report.pages_discovered
    );
    for (phrase, reason) in &report.failures {
        println!("  skipped '{}': {}", phrase, reason);
    }
    if report.cancelled {
        println!("Crawl interrupted; counts gathered so far are saved.");
    }
    println!("Word counts saved to {}", store.path().display());
}

/// Handles --analyze-relative-word-frequency
async fn handle_analysis(config: &Config, mode: AnalysisMode, count: usize, chart: Option<&Path>) {
    let store = FrequencyStore::new(&config.output.word_counts_path);
    if !store.path().exists() {
        println!(
            "Warning: {} not found. Starting with empty data.",
            store.path().display()
        );
    }
    let counts = match store.load().await {
        Ok(counts) => counts,
        Err(e) => {
            println!("Error loading word counts: {}", e);
            return;
        }
    };

    let corpus: Box<dyn LanguageCorpus> = match &config.analysis.corpus_path {
        Some(path) => match JsonCorpus::load(path).await {
            Ok(corpus) => Box::new(corpus),
            Err(e) => {
                println!("Error loading language corpus: {}", e);
                return;
            }
        },
        None => {
            tracing::warn!(
                language = %config.analysis.language,
                "No corpus configured; language frequencies are all zero"
            );
            Box::new(EmptyCorpus)
        }
    };

    let rows = analyze(&counts, corpus.as_ref(), mode, count);
    print!("{}", console::format_comparison(&rows));

    if let Some(path) = chart {
        if rows.is_empty() {
            println!("No data to plot.");
            return;
        }
        match generate_markdown_report(&rows, mode, path) {
            Ok(()) => println!("Chart successfully saved to: {}", path.display()),
            Err(e) => println!("Error saving chart: {}", e),
        }
    }
}
