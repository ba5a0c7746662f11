//! Summary data for a finished crawl

use crate::crawler::CrawlReport;
use crate::output::stats::{top_words, CrawlStatistics};
use crate::state::CrawlOutcome;

/// Summary statistics for a crawl
#[derive(Debug, Clone, Default)]
pub struct CrawlSummary {
    // Run metadata
    pub seed: String,
    pub started_at: String,
    pub finished_at: String,
    pub duration_seconds: u64,
    pub stop_reason: String,
    pub config_hash: Option<String>,

    // Outcome breakdown
    pub urls_processed: usize,
    pub pages_crawled: usize,
    pub requests_failed: usize,
    pub invalid_type: usize,
    pub urls_pending: usize,

    // Corpus
    pub corpus_words: usize,
    pub top_words: Vec<(String, usize)>,
}

impl CrawlSummary {
    /// Creates a new empty crawl summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the summary of a finished crawl
    ///
    /// # Arguments
    ///
    /// * `report` - The finished crawl
    /// * `config_hash` - Hash of the configuration file, if one was used
    /// * `word_limit` - Number of entries in the word-frequency table
    pub fn from_report(report: &CrawlReport, config_hash: Option<&str>, word_limit: usize) -> Self {
        let stats = CrawlStatistics::from_report(report);
        let duration_seconds = (report.finished_at - report.started_at)
            .num_seconds()
            .max(0) as u64;

        Self {
            seed: report.seed.to_string(),
            started_at: report.started_at.to_rfc3339(),
            finished_at: report.finished_at.to_rfc3339(),
            duration_seconds,
            stop_reason: report.stop_reason.as_str().to_string(),
            config_hash: config_hash.map(str::to_string),
            urls_processed: stats.urls_processed,
            pages_crawled: stats.count(CrawlOutcome::Crawled),
            requests_failed: stats.count(CrawlOutcome::RequestFailed),
            invalid_type: stats.count(CrawlOutcome::InvalidType),
            urls_pending: stats.urls_pending,
            corpus_words: stats.corpus_words,
            top_words: top_words(&report.corpus, word_limit),
        }
    }

    /// Returns the success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.urls_processed == 0 {
            return 0.0;
        }
        (self.pages_crawled as f64 / self.urls_processed as f64) * 100.0
    }

    /// Returns the share of failed requests as a percentage
    pub fn error_rate(&self) -> f64 {
        if self.urls_processed == 0 {
            return 0.0;
        }
        (self.requests_failed as f64 / self.urls_processed as f64) * 100.0
    }
}
