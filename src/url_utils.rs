//! URL Utility Functions
//!
//! Validation of requested URLs, derivation of the secondary index-page URL,
//! social link normalization and internal/external link classification.

use url::Url;

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    // Must start with http:// or https://
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) => {
            // Verify it has a host
            if url.host().is_some() {
                (true, Some(url))
            } else {
                (false, None)
            }
        }
        Err(_) => (false, None),
    }
}

/// Parse a URL string into a Url object.
///
/// # Returns
/// * `Some(Url)` if valid absolute URL, `None` otherwise
#[must_use]
pub fn parse_url(url_str: &str) -> Option<Url> {
    let (is_abs, parsed) = is_absolute_url(url_str);
    if is_abs {
        parsed
    } else {
        None
    }
}

/// Derive the secondary `index.html` URL for a requested URL.
///
/// URLs that already end in `/` or `index.html` have no separate index page.
///
/// # Examples
/// ```
/// use rs_siteprofile::url_utils::index_page_url;
///
/// assert_eq!(
///     index_page_url("https://acme.test/shop").as_deref(),
///     Some("https://acme.test/shop/index.html")
/// );
/// assert_eq!(index_page_url("https://acme.test/"), None);
/// assert_eq!(index_page_url("https://acme.test/index.html"), None);
/// ```
#[must_use]
pub fn index_page_url(url: &str) -> Option<String> {
    if url.ends_with("index.html") || url.ends_with('/') {
        return None;
    }
    Some(format!("{url}/index.html"))
}

/// Make a social link absolute.
///
/// Links already starting with `http` are returned unchanged. Anything else
/// (protocol-relative, scheme-less or relative) is rewritten to
/// `https://<platform>/<path>`, where the path is whatever follows the
/// platform hostname in the original `href`.
///
/// # Examples
/// ```
/// use rs_siteprofile::url_utils::absolute_social_url;
///
/// assert_eq!(
///     absolute_social_url("//www.facebook.com/acme", "facebook.com"),
///     "https://facebook.com/acme"
/// );
/// assert_eq!(
///     absolute_social_url("https://twitter.com/acme", "twitter.com"),
///     "https://twitter.com/acme"
/// );
/// ```
#[must_use]
pub fn absolute_social_url(href: &str, platform: &str) -> String {
    if href.starts_with("http") {
        return href.to_string();
    }

    let path = href
        .find(platform)
        .map_or(href, |pos| &href[pos + platform.len()..]);
    let path = path.trim_start_matches('/');

    format!("https://{platform}/{path}")
}

/// Whether a link stays on the site: root-relative, or under the canonical URL.
#[must_use]
pub fn is_internal_link(href: &str, canonical: &str) -> bool {
    href.starts_with('/') || (!canonical.is_empty() && href.starts_with(canonical))
}

/// Whether a link leaves the site: absolute http(s) and not under the canonical URL.
#[must_use]
pub fn is_external_link(href: &str, canonical: &str) -> bool {
    href.starts_with("http") && (canonical.is_empty() || !href.contains(canonical))
}
