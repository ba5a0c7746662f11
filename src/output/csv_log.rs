//! CSV export of the crawl status log

use crate::output::OutputResult;
use crate::state::CrawlLog;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column headers of the crawl log
pub const CSV_HEADERS: [&str; 2] = ["Page", "Crawl Status"];

/// Writes the crawl log to a CSV file, one row per processed URL
pub fn write_crawl_log(log: &CrawlLog, path: &Path) -> OutputResult<()> {
    let file = File::create(path)?;
    write_crawl_log_to(log, file)
}

/// Writes the crawl log as CSV to any writer
pub fn write_crawl_log_to<W: Write>(log: &CrawlLog, writer: W) -> OutputResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(CSV_HEADERS)?;

    for record in log {
        writer.write_record([record.url.as_str(), record.outcome.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}
