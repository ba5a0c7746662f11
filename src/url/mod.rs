//! URL handling module for Wordsweep
//!
//! This module turns raw hyperlink references into canonical, comparable URLs
//! and decides whether a host belongs to the crawl's domain.

mod domain;
mod matcher;
mod normalize;

use crate::{UrlError, UrlResult};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;
use url::Url;

// Re-export main functions
pub use domain::{extract_domain, registered_domain};
pub use matcher::{host_in_scope, matches_wildcard};
pub use normalize::canonicalize;

/// How strictly a link's host has to match the seed's domain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScopeMode {
    /// The host (ignoring a leading `www.`) equals the seed's domain
    #[default]
    Exact,
    /// The seed's domain or any subdomain of it
    Subdomain,
    /// Any host that contains the seed's domain as text
    ///
    /// This is loose: `example.com.evil.net` and `notexample.com` both pass.
    Substring,
}

impl fmt::Display for ScopeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Subdomain => write!(f, "subdomain"),
            Self::Substring => write!(f, "substring"),
        }
    }
}

/// A normalized absolute URL, comparable by value
///
/// Canonical URLs carry the seed's scheme, a `www.`-prefixed host, no query
/// string and no fragment. They can only be produced by [`CrawlScope`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalUrl(Url);

impl CanonicalUrl {
    /// Returns the canonical URL as a string slice
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the underlying parsed URL
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host of the canonical URL
    pub fn host_str(&self) -> &str {
        self.0.host_str().unwrap_or_default()
    }
}

impl fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl AsRef<str> for CanonicalUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Why a raw link did not produce a canonical URL
///
/// Rejections are ordinary filter outcomes, not failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("empty link")]
    Empty,

    #[error("unparseable link: {0}")]
    Unparseable(String),

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("link has no host")]
    MissingHost,

    #[error("host {0} is outside the crawl scope")]
    OutOfScope(String),
}

/// The fixed frame of one crawl: seed scheme, seed domain and match strictness
///
/// Built once from the seed URL and never modified while the crawl runs.
#[derive(Debug, Clone)]
pub struct CrawlScope {
    seed: CanonicalUrl,
    scheme: String,
    domain: String,
    mode: ScopeMode,
}

impl CrawlScope {
    /// Creates the scope for a crawl starting at `seed`
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlScope)` - The seed is an absolute HTTP(S) URL with a host
    /// * `Err(UrlError)` - The seed cannot anchor a crawl
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsweep::url::{CrawlScope, ScopeMode};
    ///
    /// let scope = CrawlScope::new("http://example.com/", ScopeMode::Exact).unwrap();
    /// assert_eq!(scope.domain(), "example.com");
    /// assert_eq!(scope.seed().as_str(), "http://www.example.com/");
    /// ```
    pub fn new(seed: &str, mode: ScopeMode) -> UrlResult<Self> {
        let parsed = Url::parse(seed.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(UrlError::InvalidScheme(format!(
                "Only HTTP and HTTPS schemes are supported, got: {}",
                parsed.scheme()
            )));
        }

        let host = extract_domain(&parsed).ok_or(UrlError::MissingDomain)?;
        let domain = registered_domain(&host).to_string();
        if domain.is_empty() {
            return Err(UrlError::MissingDomain);
        }

        let scheme = parsed.scheme().to_string();
        let seed = normalize::rebuild(&scheme, &parsed)
            .map_err(|rejection| UrlError::Parse(rejection.to_string()))?;

        Ok(Self {
            seed,
            scheme,
            domain,
            mode,
        })
    }

    /// The canonical form of the seed URL
    pub fn seed(&self) -> &CanonicalUrl {
        &self.seed
    }

    /// The seed's scheme, shared by every canonical URL of this crawl
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The seed's host without any leading `www.`
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The configured matching strictness
    pub fn mode(&self) -> ScopeMode {
        self.mode
    }

    /// Returns true if `host` belongs to this crawl
    pub fn contains_host(&self, host: &str) -> bool {
        host_in_scope(self.mode, &self.domain, host)
    }

    /// Canonicalizes a raw link found on `page`
    ///
    /// Relative references are resolved against the page they were found on.
    pub fn canonicalize(&self, page: &Url, raw: &str) -> Result<CanonicalUrl, Rejection> {
        canonicalize(self, page, raw)
    }
}
