//! Markdown summary generation
//!
//! This module generates human-readable markdown summaries of crawl results,
//! including outcome counts and the word-frequency table of the corpus.

use crate::output::summary::CrawlSummary;
use crate::output::OutputResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Generates a markdown summary from crawl statistics
///
/// # Arguments
///
/// * `summary` - The crawl summary data
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote markdown summary
/// * `Err(OutputError)` - Failed to write summary
pub fn generate_markdown_summary(summary: &CrawlSummary, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_summary(summary);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a crawl summary as markdown
///
/// # Arguments
///
/// * `summary` - The crawl summary data
///
/// # Returns
///
/// A formatted markdown string
pub fn format_markdown_summary(summary: &CrawlSummary) -> String {
    let mut md = String::new();

    // Title
    md.push_str("# Wordsweep Crawl Summary\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Seed**: {}\n", summary.seed));
    md.push_str(&format!("- **Started**: {}\n", summary.started_at));
    md.push_str(&format!("- **Finished**: {}\n", summary.finished_at));
    md.push_str(&format!(
        "- **Duration**: {} seconds ({:.2} minutes)\n",
        summary.duration_seconds,
        summary.duration_seconds as f64 / 60.0
    ));
    md.push_str(&format!("- **Stopped**: {}\n", summary.stop_reason));
    if let Some(hash) = &summary.config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push('\n');

    // Overall statistics
    md.push_str("## Overall Statistics\n\n");
    md.push_str(&format!(
        "- **URLs Processed**: {}\n",
        summary.urls_processed
    ));
    md.push_str(&format!(
        "- **URLs Left in Frontier**: {}\n",
        summary.urls_pending
    ));
    md.push_str(&format!("- **Words in Corpus**: {}\n", summary.corpus_words));
    md.push_str(&format!(
        "- **Success Rate**: {:.2}%\n",
        summary.success_rate()
    ));
    md.push_str(&format!(
        "- **Error Rate**: {:.2}%\n\n",
        summary.error_rate()
    ));

    // Outcome breakdown
    md.push_str("## Crawl Status Breakdown\n\n");
    md.push_str("| Status | Count |\n");
    md.push_str("|--------|-------|\n");
    md.push_str(&format!("| Crawled | {} |\n", summary.pages_crawled));
    md.push_str(&format!(
        "| Request Failed | {} |\n",
        summary.requests_failed
    ));
    md.push_str(&format!("| Invalid Type | {} |\n\n", summary.invalid_type));

    // Word frequencies
    if !summary.top_words.is_empty() {
        md.push_str(&format!(
            "## Top {} Words\n\n",
            summary.top_words.len()
        ));
        md.push_str("| Rank | Word | Count |\n");
        md.push_str("|------|------|-------|\n");

        for (rank, (word, count)) in summary.top_words.iter().enumerate() {
            md.push_str(&format!("| {} | {} | {} |\n", rank + 1, word, count));
        }
        md.push('\n');
    }

    md
}
