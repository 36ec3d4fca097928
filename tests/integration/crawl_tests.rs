//! Integration tests for fetching, extraction and crawling
//!
//! These tests use wiremock to serve a small wiki and run the full
//! fetch -> locate -> extract/count cycle end-to-end.

use std::time::Duration;
use tempfile::TempDir;
use wiki_harvest::config::{CrawlerConfig, UserAgentConfig};
use wiki_harvest::extract::{summarize, TableExtractor};
use wiki_harvest::fetch::{build_http_client, load_document, FileSource, HttpSource, PageSource};
use wiki_harvest::output::TableExporter;
use wiki_harvest::{ContentLocator, Crawler, FetchError, FrequencyStore, Phrase};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_user_agent() -> UserAgentConfig {
    UserAgentConfig {
        crawler_name: "TestBot".to_string(),
        crawler_version: "1.0.0".to_string(),
        contact_url: "https://example.com/contact".to_string(),
        contact_email: "test@example.com".to_string(),
    }
}

fn http_source(server: &MockServer) -> HttpSource {
    let client = build_http_client(&test_user_agent(), &CrawlerConfig::default())
        .expect("Failed to build client");
    HttpSource::new(client, server.uri())
}

/// Wraps body HTML the way MediaWiki renders an article
fn article(body: &str) -> String {
    format!(
        r#"<html><head><title>Article</title></head><body>
        <div id="mw-navigation"><a href="/wiki/Main_Page">Main page</a></div>
        <div id="mw-content-text"><div class="mw-parser-output">{}</div></div>
        </body></html>"#,
        body
    )
}

async fn mount_article(server: &MockServer, title: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/wiki/{}", title)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(article(body))
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_http_source_fetches_article_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wiki/Team_Rocket"))
        .and(header("user-agent", "TestBot/1.0.0 (+https://example.com/contact; test@example.com)"))
        .respond_with(ResponseTemplate::new(200).set_body_string(article(
            "<p></p><p><b>Team Rocket</b> is a villainous team.</p>",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let source = http_source(&server);
    let doc = load_document(&source, &Phrase::new("Team Rocket"))
        .await
        .expect("fetch should succeed");
    let region = ContentLocator::default().locate(&doc).expect("content region");

    assert_eq!(
        summarize(&region),
        Some("Team Rocket is a villainous team.".to_string())
    );
}

#[tokio::test]
async fn test_http_source_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wiki/Missingno"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = http_source(&server)
        .fetch(&Phrase::new("Missingno"))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_http_source_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wiki/Pikachu"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = http_source(&server)
        .fetch(&Phrase::new("Pikachu"))
        .await
        .unwrap_err();

    match err {
        FetchError::Transport { message, .. } => assert_eq!(message, "HTTP 503"),
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_crawl_respects_depth_and_aggregates_counts() {
    let server = MockServer::start().await;

    mount_article(
        &server,
        "Start",
        r#"<p>Start page about Pikachu.</p>
           <a href="/wiki/Pikachu">Pikachu</a>
           <a href="/wiki/Raichu">Raichu</a>
           <a href="https://example.com/out">outside</a>"#,
    )
    .await;
    mount_article(
        &server,
        "Pikachu",
        r#"<p>Pikachu evolves into Raichu.</p><a href="/wiki/Pichu">Pichu</a><a href="/wiki/Start">back</a>"#,
    )
    .await;
    mount_article(&server, "Raichu", "<p>Raichu is Electric.</p>").await;

    // depth 2 is beyond the limit and must never be requested
    Mock::given(method("GET"))
        .and(path("/wiki/Pichu"))
        .respond_with(ResponseTemplate::new(200).set_body_string(article("<p>Pichu</p>")))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = FrequencyStore::new(dir.path().join("word-counts.json"));
    let source = http_source(&server);

    let report = Crawler::new(&source, &store)
        .with_max_depth(1)
        .with_wait(Duration::from_millis(5))
        .run(Phrase::new("Start"))
        .await;

    let processed: Vec<(String, u32)> = report
        .processed
        .iter()
        .map(|(p, d)| (p.to_string(), *d))
        .collect();
    assert_eq!(
        processed,
        vec![
            ("Start".to_string(), 0),
            ("Pikachu".to_string(), 1),
            ("Raichu".to_string(), 1),
        ]
    );
    assert_eq!(report.failed_count(), 0);
    assert!(!report.cancelled);

    let counts = store.load().await.unwrap();
    // navigation links sit outside the content region
    assert_eq!(counts.get("pikachu"), 3);
    assert_eq!(counts.get("raichu"), 3);
    assert_eq!(counts.get("main"), 0);

    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(on_disk["electric"], 1);
}

#[tokio::test]
async fn test_crawl_skips_missing_articles() {
    let server = MockServer::start().await;

    mount_article(
        &server,
        "Start",
        r#"<p>Links</p><a href="/wiki/Gone">gone</a><a href="/wiki/Eevee">Eevee</a>"#,
    )
    .await;
    mount_article(&server, "Eevee", "<p>Eevee evolves.</p>").await;
    Mock::given(method("GET"))
        .and(path("/wiki/Gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = FrequencyStore::new(dir.path().join("word-counts.json"));
    let source = http_source(&server);

    let report = Crawler::new(&source, &store)
        .with_max_depth(1)
        .with_wait(Duration::ZERO)
        .run(Phrase::new("Start"))
        .await;

    assert_eq!(report.processed_count(), 2);
    assert_eq!(report.failed_count(), 1);
    assert_eq!(report.failures[0].0, Phrase::new("Gone"));
    assert_eq!(store.load().await.unwrap().get("eevee"), 2);
}

#[tokio::test]
async fn test_table_from_local_file() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("types.html");
    std::fs::write(
        &page,
        article(
            r#"<table class="infobox"><tr><td>Infobox</td></tr></table>
               <table class="wikitable">
                 <tr><th>Col1</th><th>Col2</th></tr>
                 <tr><td>A</td><td>10</td></tr>
                 <tr><td>B</td><td>20</td></tr>
               </table>"#,
        ),
    )
    .unwrap();

    let phrase = Phrase::new("Type chart");
    let doc = load_document(&FileSource::new(&page), &phrase).await.unwrap();
    let region = ContentLocator::default().locate(&doc).unwrap();

    let extractor = TableExtractor::new(TableExporter::new(dir.path()));
    let extraction = extractor.extract(&region, &phrase, 2, true).unwrap();

    assert_eq!(extraction.table.len(), 2);
    assert_eq!(extraction.table.cell(0, 0), Some("10"));
    assert_eq!(extraction.values.get("20"), Some(1));

    let csv_path = extraction.export.expect("export should succeed");
    assert_eq!(csv_path, dir.path().join("Type chart.csv"));
    assert_eq!(
        std::fs::read_to_string(csv_path).unwrap(),
        "Col1,Col2\nA,10\nB,20\n"
    );
}

#[tokio::test]
async fn test_missing_local_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let source = FileSource::new(dir.path().join("absent.html"));

    let err = source.fetch(&Phrase::new("Anything")).await.unwrap_err();
    assert!(err.is_not_found());
}
