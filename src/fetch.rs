//! Page retrieval.
//!
//! [`Fetch`] is the seam between the orchestrator and the network: the
//! orchestrator only ever asks for a URL's markup and headers, so tests can
//! substitute an in-memory implementation. [`HttpFetcher`] is the real one.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::encoding::decode_body;
use crate::{Error, Options, ResponseHeaders, Result};

/// Markup and headers returned for one URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedPage {
    /// Final URL after redirects.
    pub url: String,

    /// Body decoded to UTF-8.
    pub body: String,

    /// Response headers with lower-cased names.
    pub headers: ResponseHeaders,
}

/// Something that can retrieve a page.
///
/// Implementations return an error for transport failures and non-success
/// statuses; there is no partially fetched page.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;
}

/// [`Fetch`] over HTTP using a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a client with the configured user agent, timeout and redirect limit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Client`] if the TLS backend or client cannot be initialized.
    pub fn new(options: &Options) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(options.user_agent.as_str())
            .timeout(options.timeout)
            .redirect(reqwest::redirect::Policy::limited(options.max_redirects))
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        debug!(url, "fetching page");

        let response = self.client.get(url).send().await?.error_for_status()?;

        let final_url = response.url().to_string();
        let headers = lowercase_headers(response.headers());
        let content_type = headers.get(CONTENT_TYPE.as_str()).cloned();
        let bytes = response.bytes().await?;

        debug!(url = %final_url, bytes = bytes.len(), "fetched page");

        Ok(FetchedPage {
            url: final_url,
            body: decode_body(&bytes, content_type.as_deref()),
            headers,
        })
    }
}

/// Copy a header map into [`ResponseHeaders`].
///
/// Names are already lower-case in `http`; values that are not visible ASCII
/// are decoded lossily. Repeated headers keep the last value.
fn lowercase_headers(map: &reqwest::header::HeaderMap) -> ResponseHeaders {
    map.iter()
        .map(|(name, value)| {
            (
                name.as_str().to_ascii_lowercase(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}
