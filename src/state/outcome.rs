/// Crawl outcome definitions and the crawl log
///
/// Every URL taken from the frontier produces exactly one status record.
use crate::url::CanonicalUrl;
use std::fmt;

/// How the fetch attempt for one URL ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlOutcome {
    /// Page was fetched as HTML and its text and links were extracted
    Crawled,

    /// The request could not be completed (connection, DNS, TLS, body read)
    RequestFailed,

    /// The response was not an HTML document
    InvalidType,
}

impl CrawlOutcome {
    /// All outcomes, in report order
    pub const ALL: [CrawlOutcome; 3] = [Self::Crawled, Self::RequestFailed, Self::InvalidType];

    /// Returns true if the page contributed to the corpus
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Crawled)
    }

    /// Human readable label used in exported logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Crawled => "Crawled",
            Self::RequestFailed => "Request Failed",
            Self::InvalidType => "Invalid Type",
        }
    }
}

impl fmt::Display for CrawlOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the crawl log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlStatusRecord {
    pub url: CanonicalUrl,
    pub outcome: CrawlOutcome,
}

/// Ordered sequence of status records, in the order URLs left the frontier
#[derive(Debug, Clone, Default)]
pub struct CrawlLog {
    records: Vec<CrawlStatusRecord>,
}

impl CrawlLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the record for a URL that was just processed
    pub fn record(&mut self, url: CanonicalUrl, outcome: CrawlOutcome) {
        self.records.push(CrawlStatusRecord { url, outcome });
    }

    pub fn records(&self) -> &[CrawlStatusRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &CrawlStatusRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records with the given outcome
    pub fn count(&self, outcome: CrawlOutcome) -> usize {
        self.records.iter().filter(|r| r.outcome == outcome).count()
    }

    /// Returns the outcome recorded for `url`, if it was processed
    pub fn outcome_of(&self, url: &str) -> Option<CrawlOutcome> {
        self.records
            .iter()
            .find(|r| r.url.as_str() == url)
            .map(|r| r.outcome)
    }
}

impl IntoIterator for CrawlLog {
    type Item = CrawlStatusRecord;
    type IntoIter = std::vec::IntoIter<CrawlStatusRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a CrawlLog {
    type Item = &'a CrawlStatusRecord;
    type IntoIter = std::slice::Iter<'a, CrawlStatusRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
