//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the main crawl loop that coordinates all aspects of
//! the crawling process, including:
//! - Draining the frontier one URL at a time
//! - Coordinating fetching, extraction, and link canonicalization
//! - Enforcing the page limit and the politeness delay
//! - Handling stop requests
//! - Producing the crawl log and the corpus

use crate::config::CrawlerConfig;
use crate::crawler::extractor::extract_page;
use crate::crawler::fetcher::{HttpFetcher, PageFetchResult, PageFetcher};
use crate::crawler::frontier::Frontier;
use crate::crawler::politeness::Politeness;
use crate::state::{Corpus, CrawlLog, CrawlOutcome};
use crate::url::{CanonicalUrl, CrawlScope};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;

/// Why the crawl loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every reachable in-scope URL was processed
    FrontierExhausted,
    /// The configured number of pages was crawled
    PageLimitReached,
    /// A stop was requested through a [`StopHandle`]
    Cancelled,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FrontierExhausted => "frontier exhausted",
            Self::PageLimitReached => "page limit reached",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Results of a finished crawl
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Canonical seed URL
    pub seed: CanonicalUrl,

    /// One record per URL taken from the frontier, in processing order
    pub log: CrawlLog,

    /// Text of every crawled page, in processing order
    pub corpus: Corpus,

    /// URLs discovered but never fetched
    pub pending: usize,

    pub stop_reason: StopReason,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlReport {
    /// Number of pages that were crawled successfully
    pub fn pages_crawled(&self) -> usize {
        self.log.count(CrawlOutcome::Crawled)
    }
}

/// Requests an early, clean end of a running crawl
///
/// The in-flight request (if any) completes and its page is fully processed;
/// no further request is issued.
#[derive(Debug, Clone)]
pub struct StopHandle {
    sender: Arc<watch::Sender<bool>>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.sender.send_replace(true);
    }

    pub fn is_stopped(&self) -> bool {
        *self.sender.borrow()
    }
}

/// Mutable state of a single crawl
///
/// Owned by one `Coordinator::run` call and dropped when it returns; only the
/// log and corpus are handed back to the caller.
#[derive(Debug)]
struct CrawlSession {
    frontier: Frontier,
    log: CrawlLog,
    corpus: Corpus,
    pages_crawled: u32,
}

impl CrawlSession {
    fn new(seed: CanonicalUrl) -> Self {
        Self {
            frontier: Frontier::new(seed),
            log: CrawlLog::new(),
            corpus: Corpus::new(),
            pages_crawled: 0,
        }
    }
}

/// Main crawler coordinator structure
pub struct Coordinator<F = HttpFetcher> {
    scope: CrawlScope,
    fetcher: F,
    page_limit: Option<u32>,
    politeness: Politeness,
    stop_sender: Arc<watch::Sender<bool>>,
    stop_receiver: watch::Receiver<bool>,
}

impl<F: PageFetcher> Coordinator<F> {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `scope` - The crawl scope built from the seed URL
    /// * `fetcher` - Retrieves pages
    /// * `config` - Page limit and politeness delay
    ///
    /// A page limit of zero is honored as is: the crawl ends before the
    /// first request.
    pub fn new(scope: CrawlScope, fetcher: F, config: &CrawlerConfig) -> Self {
        let (sender, receiver) = watch::channel(false);

        Self {
            scope,
            fetcher,
            page_limit: config.page_limit,
            politeness: Politeness::new(Duration::from_millis(config.politeness_delay)),
            stop_sender: Arc::new(sender),
            stop_receiver: receiver,
        }
    }

    /// Returns a handle that can stop this crawl from another task
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            sender: Arc::clone(&self.stop_sender),
        }
    }

    /// Runs the main crawl loop
    ///
    /// This is the core crawling logic that:
    /// 1. Takes the oldest URL from the frontier and marks it visited
    /// 2. Fetches it after the politeness delay
    /// 3. Extracts text and links from HTML pages
    /// 4. Queues new in-scope links
    /// 5. Records one status entry for the URL
    ///
    /// The loop ends when the frontier is empty, the page limit is reached or
    /// a stop is requested. Problems with individual pages never end it.
    pub async fn run(mut self) -> CrawlReport {
        let started_at = Utc::now();
        let start_time = Instant::now();
        let seed = self.scope.seed().clone();
        let mut session = CrawlSession::new(seed.clone());

        tracing::info!(
            "Starting crawl of {} (domain: {}, scope: {}, page limit: {})",
            seed,
            self.scope.domain(),
            self.scope.mode(),
            self.page_limit
                .map(|limit| limit.to_string())
                .unwrap_or_else(|| "none".to_string())
        );

        let stop_reason = loop {
            if let Some(limit) = self.page_limit {
                if session.pages_crawled >= limit {
                    tracing::info!("Page limit of {} reached", limit);
                    break StopReason::PageLimitReached;
                }
            }

            if session.frontier.is_empty() {
                break StopReason::FrontierExhausted;
            }

            if !self.politeness.wait_turn(&mut self.stop_receiver).await {
                tracing::info!("Stop requested, no further requests will be issued");
                break StopReason::Cancelled;
            }

            let url = match session.frontier.next_url() {
                Some(url) => url,
                None => break StopReason::FrontierExhausted,
            };

            let outcome = self.process_url(&mut session, &url).await;
            // The pause is counted from the end of the attempt, whatever its outcome
            self.politeness.record_attempt(Instant::now());
            session.log.record(url, outcome);

            if outcome.is_success() {
                session.pages_crawled += 1;
                tracing::info!(
                    "Progress: {} pages crawled, {} URLs waiting",
                    session.pages_crawled,
                    session.frontier.pending_count()
                );
            }
        };

        tracing::info!(
            "Crawl finished ({}): {} URLs processed, {} pages crawled in {:?}",
            stop_reason.as_str(),
            session.log.len(),
            session.pages_crawled,
            start_time.elapsed()
        );

        CrawlReport {
            seed,
            pending: session.frontier.pending_count(),
            log: session.log,
            corpus: session.corpus,
            stop_reason,
            started_at,
            finished_at: Utc::now(),
        }
    }

    /// Fetches and processes a single URL
    async fn process_url(&self, session: &mut CrawlSession, url: &CanonicalUrl) -> CrawlOutcome {
        tracing::debug!("Processing URL: {}", url);

        match self.fetcher.fetch(url).await {
            PageFetchResult::RequestFailed { error } => {
                tracing::warn!("Request to {} failed: {}", url, error);
                CrawlOutcome::RequestFailed
            }

            PageFetchResult::NonHtml { content_type } => {
                tracing::info!(
                    "Skipping {}: content type '{}' is not HTML",
                    url,
                    content_type
                );
                CrawlOutcome::InvalidType
            }

            PageFetchResult::FetchedHtml { body } => {
                let page = extract_page(&body, url.as_url());
                let added = self.handle_discovered_links(&mut session.frontier, url, &page.links);

                tracing::debug!(
                    "Extracted {} characters and {} links from {} ({} new)",
                    page.text.len(),
                    page.links.len(),
                    url,
                    added
                );

                session.corpus.append(page.text);
                CrawlOutcome::Crawled
            }
        }
    }

    /// Canonicalizes the links of a page and queues the new ones
    ///
    /// # Returns
    ///
    /// The number of URLs added to the frontier
    fn handle_discovered_links(
        &self,
        frontier: &mut Frontier,
        page: &CanonicalUrl,
        links: &[String],
    ) -> usize {
        let mut added = 0;

        for link in links {
            match self.scope.canonicalize(page.as_url(), link) {
                Ok(url) => {
                    if frontier.offer(url) {
                        added += 1;
                    }
                }
                Err(rejection) => {
                    tracing::trace!("Ignoring link {} on {}: {}", link, page, rejection);
                }
            }
        }

        added
    }
}
