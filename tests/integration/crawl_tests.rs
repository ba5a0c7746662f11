//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use std::time::{Duration, Instant};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wordsweep::config::CrawlerConfig;
use wordsweep::crawler::{redirect_policy, Coordinator, CrawlReport, HttpFetcher, StopReason};
use wordsweep::{CrawlOutcome, CrawlScope, ScopeMode};

const TEST_AGENT: &str = "WordsweepTest/1.0";

/// Builds a fetcher that bypasses any proxy configured in the environment
fn test_fetcher(scope: &CrawlScope) -> HttpFetcher {
    let client = reqwest::Client::builder()
        .no_proxy()
        .user_agent(TEST_AGENT)
        .redirect(redirect_policy(scope))
        .build()
        .expect("Failed to build HTTP client");
    HttpFetcher::from_client(client)
}

fn crawler_config(page_limit: Option<u32>, politeness_delay: u64) -> CrawlerConfig {
    CrawlerConfig {
        page_limit,
        politeness_delay,
        scope: ScopeMode::Exact,
    }
}

async fn run_crawl(seed: &str, config: CrawlerConfig) -> CrawlReport {
    let scope = CrawlScope::new(seed, config.scope).expect("Invalid seed");
    let fetcher = test_fetcher(&scope);
    Coordinator::new(scope, fetcher, &config).run().await
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/html")
}

fn logged(report: &CrawlReport) -> Vec<(String, CrawlOutcome)> {
    report
        .log
        .iter()
        .map(|record| (record.url.to_string(), record.outcome))
        .collect()
}

#[tokio::test]
async fn test_full_crawl_two_page_site() {
    // Start a mock server
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Mock index page with an internal link, an external link and a self link
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(&format!(
            r#"<html><head><title>Home</title><script>var tracking = 1;</script></head><body>
            <p>Welcome to the garden</p>
            <a href="{}/about">About</a>
            <a href="http://other.invalid/">Elsewhere</a>
            <a href="/">Home</a>
            </body></html>"#,
            base_url
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Mock about page linking back home
    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(html(
            r#"<html><body><p>We grow tomatoes</p><a href="/">Back</a></body></html>"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = run_crawl(&format!("{}/", base_url), crawler_config(None, 0)).await;

    assert_eq!(
        logged(&report),
        vec![
            (format!("{}/", base_url), CrawlOutcome::Crawled),
            (format!("{}/about", base_url), CrawlOutcome::Crawled),
        ]
    );
    assert_eq!(report.stop_reason, StopReason::FrontierExhausted);
    assert!(report.log.iter().all(|r| !r.url.as_str().contains("other.invalid")));

    let text = report.corpus.text();
    assert_eq!(text.matches("Welcome to the garden").count(), 1);
    assert_eq!(text.matches("We grow tomatoes").count(), 1);
    assert!(!text.contains("tracking"));
    assert!(!text.contains("Home Welcome"));
}

#[tokio::test]
async fn test_non_html_is_logged_as_invalid_type() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><body><p>Reports</p><a href="/file.pdf">Annual report</a></body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/file.pdf"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"%PDF-1.4".to_vec(), "application/pdf"),
        )
        .mount(&mock_server)
        .await;

    let report = run_crawl(&format!("{}/", base_url), crawler_config(None, 0)).await;

    assert_eq!(
        report.log.outcome_of(&format!("{}/file.pdf", base_url)),
        Some(CrawlOutcome::InvalidType)
    );
    assert_eq!(report.corpus.page_count(), 1);
    assert!(!report.corpus.text().contains("PDF"));
}

#[tokio::test]
async fn test_error_status_with_html_is_still_crawled() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><body><a href="/missing">Missing</a></body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_raw(
                b"<html><body><h1>Page not found</h1></body></html>".to_vec(),
                "text/html",
            ),
        )
        .mount(&mock_server)
        .await;

    let report = run_crawl(&format!("{}/", base_url), crawler_config(None, 0)).await;

    assert_eq!(
        report.log.outcome_of(&format!("{}/missing", base_url)),
        Some(CrawlOutcome::Crawled)
    );
    assert!(report.corpus.text().contains("Page not found"));
}

#[tokio::test]
async fn test_connection_failure_does_not_abort_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Same host, closed port: in scope but unreachable
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><body>
            <p>Index</p>
            <a href="http://127.0.0.1:1/down">Down</a>
            <a href="/up">Up</a>
            </body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/up"))
        .respond_with(html("<html><body><p>Still serving</p></body></html>"))
        .mount(&mock_server)
        .await;

    let report = run_crawl(&format!("{}/", base_url), crawler_config(None, 0)).await;

    assert_eq!(
        report.log.outcome_of("http://127.0.0.1:1/down"),
        Some(CrawlOutcome::RequestFailed)
    );
    assert_eq!(
        report.log.outcome_of(&format!("{}/up", base_url)),
        Some(CrawlOutcome::Crawled)
    );
    assert_eq!(report.stop_reason, StopReason::FrontierExhausted);
    assert!(!report.corpus.is_empty());
}

#[tokio::test]
async fn test_page_limit_stops_requests() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    for i in 0..5 {
        let page = if i == 0 { "/".to_string() } else { format!("/p{}", i) };
        Mock::given(method("GET"))
            .and(path(page.as_str()))
            .respond_with(html(&format!(
                r#"<html><body><p>Page {}</p><a href="/p{}">Next</a></body></html>"#,
                i,
                i + 1
            )))
            .mount(&mock_server)
            .await;
    }

    let report = run_crawl(&format!("{}/", base_url), crawler_config(Some(2), 0)).await;

    assert_eq!(report.pages_crawled(), 2);
    assert_eq!(report.stop_reason, StopReason::PageLimitReached);

    let requests = mock_server
        .received_requests()
        .await
        .expect("Request recording is disabled");
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn test_identifying_header_is_sent() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", TEST_AGENT))
        .respond_with(html("<html><body><p>Hello crawler</p></body></html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = run_crawl(&format!("{}/", base_url), crawler_config(None, 0)).await;

    assert_eq!(report.pages_crawled(), 1);
    assert_eq!(report.corpus.text(), "Hello crawler");
}

#[tokio::test]
async fn test_politeness_delay_spaces_requests() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><body><a href="/a">A</a><a href="/b">B</a></body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(html("<html><body>leaf</body></html>"))
        .mount(&mock_server)
        .await;

    let started = Instant::now();
    let report = run_crawl(&format!("{}/", base_url), crawler_config(None, 100)).await;

    assert_eq!(report.pages_crawled(), 3);
    assert!(started.elapsed() >= Duration::from_millis(200));
}

#[tokio::test]
async fn test_redirected_page_is_logged_under_requested_url() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<html><body><a href="/old">Old</a></body></html>"#))
        .mount(&mock_server)
        .await;

    let location = format!("{}/new", base_url);
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", location.as_str()))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(html("<html><body><p>Moved here</p></body></html>"))
        .mount(&mock_server)
        .await;

    let report = run_crawl(&format!("{}/", base_url), crawler_config(None, 0)).await;

    assert_eq!(
        report.log.outcome_of(&format!("{}/old", base_url)),
        Some(CrawlOutcome::Crawled)
    );
    assert_eq!(report.log.outcome_of(&format!("{}/new", base_url)), None);
    assert!(report.corpus.text().contains("Moved here"));
}

#[tokio::test]
async fn test_redirect_off_site_is_not_followed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // A second server reached through another host name is outside the scope
    let other_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/x"))
        .respond_with(html("<html><body><p>OFFSITE TEXT</p></body></html>"))
        .mount(&other_server)
        .await;
    let other_port = other_server.address().port();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<html><body><p>home</p><a href="/go">Go</a></body></html>"#))
        .mount(&mock_server)
        .await;

    let location = format!("http://localhost:{}/x", other_port);
    Mock::given(method("GET"))
        .and(path("/go"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", location.as_str()))
        .mount(&mock_server)
        .await;

    let report = run_crawl(&format!("{}/", base_url), crawler_config(None, 0)).await;

    assert_eq!(
        report.log.outcome_of(&format!("{}/go", base_url)),
        Some(CrawlOutcome::RequestFailed)
    );
    assert_eq!(report.corpus.text(), "home");
    assert!(!report.corpus.text().contains("OFFSITE TEXT"));

    let requests = other_server
        .received_requests()
        .await
        .expect("Request recording is disabled");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_stop_handle_ends_crawl_during_delay() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<html><body><p>Root</p><a href="/next">Next</a></body></html>"#))
        .mount(&mock_server)
        .await;

    let config = crawler_config(None, 60_000);
    let scope = CrawlScope::new(&format!("{}/", base_url), config.scope).unwrap();
    let fetcher = test_fetcher(&scope);
    let coordinator = Coordinator::new(scope, fetcher, &config);
    let stop = coordinator.stop_handle();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        stop.stop();
    });

    let report = tokio::time::timeout(Duration::from_secs(10), coordinator.run())
        .await
        .expect("Stop did not end the crawl");

    assert_eq!(report.stop_reason, StopReason::Cancelled);
    assert_eq!(report.log.len(), 1);
    assert_eq!(report.pending, 1);
    assert_eq!(report.corpus.text(), "Root");
}

#[tokio::test]
async fn test_invalid_seed_fails_before_any_request() {
    let config = wordsweep::Config::default();

    let result = wordsweep::crawl("mailto:team@example.com", &config).await;
    assert!(matches!(result, Err(wordsweep::SweepError::InvalidSeed(_))));

    let result = wordsweep::crawl("not a url", &config).await;
    assert!(matches!(result, Err(wordsweep::SweepError::InvalidSeed(_))));
}

#[tokio::test]
async fn test_invalid_config_fails_before_any_request() {
    let mock_server = MockServer::start().await;
    let mut config = wordsweep::Config::default();
    config.crawler.page_limit = Some(0);

    let result = wordsweep::crawl(&format!("{}/", mock_server.uri()), &config).await;
    assert!(matches!(result, Err(wordsweep::SweepError::Config(_))));

    let requests = mock_server
        .received_requests()
        .await
        .expect("Request recording is disabled");
    assert!(requests.is_empty());
}
