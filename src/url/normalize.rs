use crate::url::domain::{extract_domain, registered_domain};
use crate::url::{CanonicalUrl, CrawlScope, Rejection};
use url::{Host, Url};

/// Canonicalizes a raw link according to Wordsweep's normalization rules
///
/// # Normalization Steps
///
/// 1. Resolve the link against the page it was found on; reject if malformed
/// 2. Reject anything that is not HTTP or HTTPS (`mailto:`, `javascript:`, ...)
/// 3. Reject hosts outside the crawl scope
/// 4. Drop query string and fragment
/// 5. Drop any leading `www.` from the host
/// 6. Rebuild as `{seed scheme}://www.{host}{port}{path}`
///
/// The function is pure: it keeps no memory of earlier calls, so duplicate
/// suppression is left to the frontier.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use wordsweep::url::{canonicalize, CrawlScope, ScopeMode};
///
/// let scope = CrawlScope::new("http://example.com/", ScopeMode::Exact).unwrap();
/// let page = Url::parse("http://www.example.com/blog/").unwrap();
///
/// let url = canonicalize(&scope, &page, "post?replytocom=19#comments").unwrap();
/// assert_eq!(url.as_str(), "http://www.example.com/blog/post");
/// ```
pub fn canonicalize(scope: &CrawlScope, page: &Url, raw: &str) -> Result<CanonicalUrl, Rejection> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Rejection::Empty);
    }

    let url = page
        .join(raw)
        .map_err(|e| Rejection::Unparseable(format!("{}: {}", raw, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Rejection::UnsupportedScheme(url.scheme().to_string()));
    }

    let host = extract_domain(&url).ok_or(Rejection::MissingHost)?;
    if !scope.contains_host(&host) {
        return Err(Rejection::OutOfScope(host));
    }

    rebuild(scope.scheme(), &url)
}

/// Rebuilds an absolute URL in canonical form under the given scheme
///
/// Only domain names receive the `www.` prefix; IP literal hosts are kept as-is
/// since `www.127.0.0.1` is not a valid host.
pub(crate) fn rebuild(scheme: &str, url: &Url) -> Result<CanonicalUrl, Rejection> {
    let host = extract_domain(url).ok_or(Rejection::MissingHost)?;
    let prefix = match url.host() {
        Some(Host::Domain(_)) => "www.",
        _ => "",
    };
    let port = url.port().map(|p| format!(":{}", p)).unwrap_or_default();

    // Query, fragment and credentials are left behind here
    let text = format!(
        "{}://{}{}{}{}",
        scheme,
        prefix,
        registered_domain(&host),
        port,
        url.path()
    );

    Url::parse(&text)
        .map(CanonicalUrl)
        .map_err(|e| Rejection::Unparseable(format!("{}: {}", text, e)))
}
