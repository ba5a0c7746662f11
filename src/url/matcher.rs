use crate::url::domain::registered_domain;
use crate::url::ScopeMode;

/// Checks if a domain matches a wildcard pattern
///
/// This function supports two types of patterns:
/// 1. Exact match: "example.com" matches only "example.com"
/// 2. Wildcard match: "*.example.com" matches:
///    - "example.com" (the bare domain)
///    - "blog.example.com" (single subdomain)
///    - "api.v2.example.com" (nested subdomains)
///
/// # Examples
///
/// ```
/// use wordsweep::url::matches_wildcard;
///
/// assert!(matches_wildcard("example.com", "example.com"));
/// assert!(!matches_wildcard("example.com", "other.com"));
///
/// assert!(matches_wildcard("*.example.com", "example.com"));
/// assert!(matches_wildcard("*.example.com", "api.v2.example.com"));
/// assert!(!matches_wildcard("*.example.com", "example.org"));
/// ```
pub fn matches_wildcard(pattern: &str, candidate: &str) -> bool {
    if let Some(base) = pattern.strip_prefix("*.") {
        candidate == base || candidate.ends_with(&format!(".{}", base))
    } else {
        candidate == pattern
    }
}

/// Decides whether `host` belongs to a crawl of `domain`
///
/// `domain` is the seed's registered domain (lowercase, no `www.`). The host
/// is lowercased before matching.
///
/// | Mode | Accepts |
/// |------|---------|
/// | `Exact` | `domain`, `www.domain` |
/// | `Subdomain` | `domain` and every `*.domain` |
/// | `Substring` | any host containing `domain` as text |
pub fn host_in_scope(mode: ScopeMode, domain: &str, host: &str) -> bool {
    let host = host.to_lowercase();
    match mode {
        ScopeMode::Exact => registered_domain(&host) == domain,
        ScopeMode::Subdomain => matches_wildcard(&format!("*.{}", domain), &host),
        ScopeMode::Substring => host.contains(domain),
    }
}
