//! Integration tests for writing crawl results to disk

use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wordsweep::config::{CrawlerConfig, OutputConfig};
use wordsweep::crawler::{Coordinator, HttpFetcher};
use wordsweep::output::write_outputs;
use wordsweep::{CrawlScope, ScopeMode};

async fn crawl_small_site() -> (MockServer, wordsweep::CrawlReport) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                r#"<html><body><p>Tomatoes and gardens</p><a href="/logo.png">Logo</a></body></html>"#
                    .as_bytes()
                    .to_vec(),
                "text/html",
            ),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/logo.png"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(vec![0x89, b'P', b'N', b'G'], "image/png"),
        )
        .mount(&mock_server)
        .await;

    let config = CrawlerConfig {
        page_limit: None,
        politeness_delay: 0,
        scope: ScopeMode::Exact,
    };
    let scope = CrawlScope::new(&format!("{}/", mock_server.uri()), config.scope).unwrap();
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let report = Coordinator::new(scope, HttpFetcher::from_client(client), &config)
        .run()
        .await;

    (mock_server, report)
}

#[tokio::test]
async fn test_write_outputs_creates_all_files() {
    let (mock_server, report) = crawl_small_site().await;
    let dir = TempDir::new().unwrap();

    let output = OutputConfig {
        corpus_path: dir.path().join("website_text.txt").display().to_string(),
        log_path: dir.path().join("crawl_log.csv").display().to_string(),
        summary_path: Some(dir.path().join("summary.md").display().to_string()),
    };

    write_outputs(&report, &output, Some("deadbeef")).unwrap();

    let corpus = std::fs::read_to_string(&output.corpus_path).unwrap();
    assert_eq!(corpus, "Tomatoes and gardens\n");

    let log = std::fs::read_to_string(&output.log_path).unwrap();
    let base_url = mock_server.uri();
    assert_eq!(
        log,
        format!(
            "Page,Crawl Status\n{}/,Crawled\n{}/logo.png,Invalid Type\n",
            base_url, base_url
        )
    );

    let summary = std::fs::read_to_string(output.summary_path.as_ref().unwrap()).unwrap();
    assert!(summary.contains("- **Config Hash**: deadbeef"));
    assert!(summary.contains("| Crawled | 1 |"));
    assert!(summary.contains("| Invalid Type | 1 |"));
    assert!(summary.contains("| tomatoes | 1 |"));
}

#[tokio::test]
async fn test_summary_skipped_without_path() {
    let (_mock_server, report) = crawl_small_site().await;
    let dir = TempDir::new().unwrap();

    let output = OutputConfig {
        corpus_path: dir.path().join("corpus.txt").display().to_string(),
        log_path: dir.path().join("log.csv").display().to_string(),
        summary_path: None,
    };

    write_outputs(&report, &output, None).unwrap();

    let mut entries: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    entries.sort();
    assert_eq!(entries, vec!["corpus.txt", "log.csv"]);
}

#[tokio::test]
async fn test_unwritable_corpus_path_is_output_error() {
    let (_mock_server, report) = crawl_small_site().await;
    let dir = TempDir::new().unwrap();

    let output = OutputConfig {
        corpus_path: dir.path().join("missing").join("corpus.txt").display().to_string(),
        log_path: dir.path().join("log.csv").display().to_string(),
        summary_path: None,
    };

    let result = write_outputs(&report, &output, None);
    assert!(matches!(result, Err(wordsweep::SweepError::Output(_))));
}
