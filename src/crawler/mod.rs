//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching and content-type classification
//! - Text and link extraction from HTML
//! - The FIFO frontier and the politeness delay
//! - Overall crawl coordination

mod coordinator;
mod extractor;
mod fetcher;
mod frontier;
mod politeness;

pub use coordinator::{Coordinator, CrawlReport, StopHandle, StopReason};
pub use extractor::{extract_page, ExtractedPage, ExtractionIssue, FORBIDDEN_TAGS};
pub use fetcher::{
    build_http_client, fetch_url, redirect_policy, HttpFetcher, PageFetchResult, PageFetcher,
    MAX_REDIRECTS,
};
pub use frontier::Frontier;
pub use politeness::Politeness;

use crate::config::{validate, Config};
use crate::url::CrawlScope;

/// Runs a complete crawl
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Validate the configuration
/// 2. Validate and canonicalize the seed URL
/// 3. Build the HTTP client
/// 4. Crawl breadth-first until the frontier is empty or the page limit is hit
///
/// # Arguments
///
/// * `seed` - The URL the crawl starts from
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - The crawl log and corpus
/// * `Err(SweepError)` - The configuration or seed was invalid, or the client
///   could not be built
pub async fn crawl(seed: &str, config: &Config) -> crate::Result<CrawlReport> {
    validate(config)?;
    let scope = CrawlScope::new(seed, config.crawler.scope)?;
    let fetcher = HttpFetcher::new(&config.user_agent, &scope)?;

    Ok(Coordinator::new(scope, fetcher, &config.crawler).run().await)
}
