//! Error types for rs-siteprofile.
//!
//! Only input problems and upstream fetch failures are errors. Extractors
//! never fail: a missing pattern or selector yields the field's empty default.

/// Error type for profile operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No URL was supplied, or it was blank.
    #[error("URL is required")]
    MissingUrl,

    /// The supplied URL is not an absolute http(s) URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be read as a scrape request.
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    /// The upstream page could not be retrieved (DNS, connect, timeout, body read).
    #[error("{0}")]
    Fetch(String),

    /// The upstream page answered with a non-success status.
    #[error("Request failed with status code {status} for {url}")]
    HttpStatus {
        /// HTTP status code returned by the server.
        status: u16,
        /// URL that was requested.
        url: String,
    },

    /// The HTTP client could not be constructed from the options.
    #[error("HTTP client setup failed: {0}")]
    Client(String),

    /// A record could not be serialized for export.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl Error {
    /// Whether the error was caused by the caller's input rather than upstream.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MissingUrl | Self::InvalidUrl(_) | Self::InvalidRequest(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::HttpStatus {
                status: status.as_u16(),
                url: err.url().map(ToString::to_string).unwrap_or_default(),
            },
            None => Self::Fetch(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for profile operations.
pub type Result<T> = std::result::Result<T, Error>;
