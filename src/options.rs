//! Configuration options for fetching and profiling.
//!
//! Extraction itself has no knobs: selector tables, caps and thresholds are
//! fixed so that output is deterministic for a given page. Options only shape
//! how pages are retrieved.

use std::time::Duration;

/// Browser-like user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Configuration options for [`crate::profile_url`] and [`crate::HttpFetcher`].
///
/// # Example
///
/// ```rust
/// use rs_siteprofile::Options;
/// use std::time::Duration;
///
/// let options = Options {
///     timeout: Duration::from_secs(10),
///     fetch_index_page: false,
///     ..Options::default()
/// };
/// assert_eq!(options.max_redirects, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// User-Agent header sent upstream.
    ///
    /// Default: a desktop Chrome user agent
    pub user_agent: String,

    /// Total request timeout per fetch.
    ///
    /// Default: `30s`
    pub timeout: Duration,

    /// Maximum number of redirects followed per fetch.
    ///
    /// Default: `10`
    pub max_redirects: usize,

    /// Attempt the secondary `index.html` fetch.
    ///
    /// When false the primary document doubles as the index document.
    ///
    /// Default: `true`
    pub fetch_index_page: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            max_redirects: 10,
            fetch_index_page: true,
        }
    }
}

impl Options {
    /// Override defaults from `SITEPROFILE_USER_AGENT` and `SITEPROFILE_TIMEOUT_SECS`.
    ///
    /// Unset or unparseable variables keep the default value.
    #[must_use]
    pub fn from_env() -> Self {
        let mut options = Self::default();

        if let Ok(agent) = std::env::var("SITEPROFILE_USER_AGENT") {
            if !agent.trim().is_empty() {
                options.user_agent = agent;
            }
        }

        if let Some(secs) = std::env::var("SITEPROFILE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            options.timeout = Duration::from_secs(secs);
        }

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fetch_index_page() {
        let options = Options::default();
        assert!(options.fetch_index_page);
        assert_eq!(options.timeout, Duration::from_secs(30));
        assert_eq!(options.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn struct_update_keeps_other_defaults() {
        let options = Options {
            fetch_index_page: false,
            ..Options::default()
        };
        assert!(!options.fetch_index_page);
        assert_eq!(options.max_redirects, 10);
    }
}
