use url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// If the URL has no host, it returns None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use wordsweep::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("https://sub.example.com/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("sub.example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns the domain a host belongs to for scoping purposes
///
/// This is the host with a single leading `www.` removed, so that
/// `www.example.com` and `example.com` share the domain `example.com`.
///
/// # Examples
///
/// ```
/// use wordsweep::url::registered_domain;
///
/// assert_eq!(registered_domain("www.example.com"), "example.com");
/// assert_eq!(registered_domain("blog.example.com"), "blog.example.com");
/// ```
pub fn registered_domain(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}
