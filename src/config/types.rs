use crate::url::ScopeMode;
use serde::Deserialize;

/// Browser identification sent with every request unless overridden
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:62.0) Gecko/20100101 Firefox/62.0";

/// Main configuration structure for Wordsweep
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Stop after this many pages were successfully crawled (unbounded when absent)
    #[serde(default, rename = "page-limit")]
    pub page_limit: Option<u32>,

    /// Minimum time between two consecutive requests (milliseconds)
    #[serde(default = "default_politeness_delay", rename = "politeness-delay")]
    pub politeness_delay: u64,

    /// How strictly link hosts must match the seed's domain
    #[serde(default)]
    pub scope: ScopeMode,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            page_limit: None,
            politeness_delay: default_politeness_delay(),
            scope: ScopeMode::default(),
        }
    }
}

fn default_politeness_delay() -> u64 {
    2000
}

/// Request identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Value of the `User-Agent` header
    #[serde(default = "default_user_agent")]
    pub header: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            header: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the text file the corpus is written to
    #[serde(default = "default_corpus_path", rename = "corpus-path")]
    pub corpus_path: String,

    /// Path of the CSV crawl log
    #[serde(default = "default_log_path", rename = "log-path")]
    pub log_path: String,

    /// Path of the markdown crawl summary (skipped when absent)
    #[serde(default, rename = "summary-path")]
    pub summary_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            corpus_path: default_corpus_path(),
            log_path: default_log_path(),
            summary_path: None,
        }
    }
}

fn default_corpus_path() -> String {
    "website_text.txt".to_string()
}

fn default_log_path() -> String {
    "crawl_log.csv".to_string()
}
