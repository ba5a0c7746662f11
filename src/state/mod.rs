//! State module for the results of a crawl
//!
//! # Components
//!
//! - `CrawlOutcome`: How the fetch of a single URL ended
//! - `CrawlLog`: Ordered status records, one per URL taken from the frontier
//! - `Corpus`: Append-only text accumulated from crawled pages

mod corpus;
mod outcome;

// Re-export main types
pub use corpus::Corpus;
pub use outcome::{CrawlLog, CrawlOutcome, CrawlStatusRecord};
