//! Output module for writing crawl results
//!
//! This module handles:
//! - Writing the corpus to a text file
//! - Exporting the crawl status log as CSV
//! - Generating markdown summaries with a word-frequency table
//! - Printing crawl statistics

mod corpus_file;
mod csv_log;
mod markdown;
pub mod stats;
mod summary;

pub use corpus_file::write_corpus;
pub use csv_log::{write_crawl_log, write_crawl_log_to, CSV_HEADERS};
pub use markdown::{format_markdown_summary, generate_markdown_summary};
pub use stats::{print_statistics, top_words, CrawlStatistics, DEFAULT_TOP_WORDS};
pub use summary::CrawlSummary;

use crate::config::OutputConfig;
use crate::crawler::CrawlReport;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Writes every configured output for a finished crawl
///
/// The corpus and the crawl log are always written; the markdown summary
/// only when a summary path is configured.
///
/// # Arguments
///
/// * `report` - The finished crawl
/// * `config` - Output paths
/// * `config_hash` - Hash of the configuration file, if one was used
pub fn write_outputs(
    report: &CrawlReport,
    config: &OutputConfig,
    config_hash: Option<&str>,
) -> crate::Result<()> {
    write_corpus(&report.corpus, Path::new(&config.corpus_path))?;
    tracing::info!("Corpus written to {}", config.corpus_path);

    write_crawl_log(&report.log, Path::new(&config.log_path))?;
    tracing::info!("Crawl log written to {}", config.log_path);

    if let Some(summary_path) = &config.summary_path {
        let summary = CrawlSummary::from_report(report, config_hash, DEFAULT_TOP_WORDS);
        generate_markdown_summary(&summary, Path::new(summary_path))?;
        tracing::info!("Summary written to {}", summary_path);
    }

    Ok(())
}
