//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with the configured identification header
//! - Keeping redirects inside the crawl scope
//! - Issuing one GET per URL
//! - Classifying the response as HTML, non-HTML or failed

use crate::config::UserAgentConfig;
use crate::url::{CanonicalUrl, CrawlScope};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use reqwest::Client;

/// Media types treated as HTML pages
const HTML_MEDIA_TYPES: &[&str] = &["text/html", "application/xhtml+xml"];

/// Longest redirect chain followed for a single request
pub const MAX_REDIRECTS: usize = 10;

/// Result of a fetch operation
///
/// Consumed immediately by the coordinator and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageFetchResult {
    /// The response was an HTML document
    FetchedHtml {
        /// Page body content
        body: String,
    },

    /// The response was something other than HTML
    NonHtml {
        /// The Content-Type received (empty when the header was missing)
        content_type: String,
    },

    /// The request failed before a usable response arrived
    RequestFailed {
        /// Error description
        error: String,
    },
}

/// Retrieves pages for the crawl engine
///
/// Implementations must never fail: every problem is folded into
/// [`PageFetchResult::RequestFailed`].
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &CanonicalUrl) -> PageFetchResult;
}

/// Fetcher backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher whose client identifies itself per `config` and
    /// only follows redirects that stay inside `scope`
    pub fn new(config: &UserAgentConfig, scope: &CrawlScope) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config, scope)?,
        })
    }

    /// Wraps an already configured client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &CanonicalUrl) -> PageFetchResult {
        fetch_url(&self.client, url.as_str()).await
    }
}

/// Builds an HTTP client with proper configuration
///
/// The client sends the configured `User-Agent` on every request and
/// follows redirects through [`redirect_policy`]. It keeps no cookies and
/// uses the transport's default timeouts.
///
/// # Example
///
/// ```no_run
/// use wordsweep::config::UserAgentConfig;
/// use wordsweep::crawler::build_http_client;
/// use wordsweep::{CrawlScope, ScopeMode};
///
/// let scope = CrawlScope::new("https://example.com", ScopeMode::Exact).unwrap();
/// let client = build_http_client(&UserAgentConfig::default(), &scope).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    scope: &CrawlScope,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header.as_str())
        .redirect(redirect_policy(scope))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Redirect policy that refuses to leave the crawl scope
///
/// A redirect whose target host is outside `scope` aborts the request, which
/// the fetcher then reports as [`PageFetchResult::RequestFailed`]. Chains
/// longer than [`MAX_REDIRECTS`] are cut off the same way.
pub fn redirect_policy(scope: &CrawlScope) -> Policy {
    let scope = scope.clone();
    Policy::custom(move |attempt| {
        if attempt.previous().len() > MAX_REDIRECTS {
            return attempt.error("too many redirects");
        }
        let target = attempt.url().to_string();
        let in_scope = attempt
            .url()
            .host_str()
            .map_or(false, |host| scope.contains_host(host));
        if in_scope {
            attempt.follow()
        } else {
            attempt.error(format!("redirect to {} leaves the crawl scope", target))
        }
    })
}

/// Fetches a URL and classifies the response
///
/// | Condition | Result |
/// |-----------|--------|
/// | Connection, DNS, TLS or timeout error | `RequestFailed` |
/// | Content-Type missing or not HTML | `NonHtml` |
/// | Body cannot be read | `RequestFailed` |
/// | Otherwise | `FetchedHtml` |
///
/// The HTTP status does not change the classification: an HTML error page
/// still carries visible text.
pub async fn fetch_url(client: &Client, url: &str) -> PageFetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                e.to_string()
            };
            tracing::debug!("Request to {} failed: {}", url, error);
            return PageFetchResult::RequestFailed { error };
        }
    };

    let status = response.status();
    if !status.is_success() {
        tracing::debug!("{} answered with HTTP {}", url, status.as_u16());
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !is_html(&content_type) {
        return PageFetchResult::NonHtml { content_type };
    }

    match response.text().await {
        Ok(body) => PageFetchResult::FetchedHtml { body },
        Err(e) => PageFetchResult::RequestFailed {
            error: format!("Failed to read body: {}", e),
        },
    }
}

/// Returns true if a Content-Type header value names an HTML media type
fn is_html(content_type: &str) -> bool {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    HTML_MEDIA_TYPES.contains(&media_type.as_str())
}
