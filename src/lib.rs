//! # rs-siteprofile
//!
//! Rule-based business profile extraction from a single web page.
//!
//! A page is fetched (plus an optional `index.html` sibling), parsed once, and
//! run through a fixed set of field extractors: contact details, SEO metadata,
//! technology fingerprints, page structure, forms, products, services and
//! FAQs. Every extractor is a pure function of the parsed page, so the same
//! markup always yields the same record.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_siteprofile::{extract_profile_from_html, ResponseHeaders};
//!
//! let html = r#"<html lang="en"><head><title>Acme Hardware</title>
//! <meta name="description" content="Shop tools online. Buy now, add to cart."></head>
//! <body><a href="tel:+14155550123">Call us</a></body></html>"#;
//!
//! let record = extract_profile_from_html(html, &ResponseHeaders::new());
//! assert_eq!(record.website_title, "Acme Hardware");
//! assert_eq!(record.phone, "+14155550123");
//! assert_eq!(record.business_type, "E-commerce");
//! assert_eq!(record.languages, vec!["en"]);
//! ```
//!
//! ## Fetching
//!
//! [`profile_url`] drives any [`Fetch`] implementation; [`HttpFetcher`] is the
//! `reqwest`-backed one configured from [`Options`].
//!
//! ```rust,no_run
//! use rs_siteprofile::{profile_url, HttpFetcher, Options};
//!
//! # async fn run() -> rs_siteprofile::Result<()> {
//! let options = Options::default();
//! let fetcher = HttpFetcher::new(&options)?;
//! let record = profile_url(&fetcher, "https://example.com", &options).await?;
//! println!("{}", record.business_type);
//! # Ok(())
//! # }
//! ```

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM adapter over `dom_query`: [`dom::Page`] and query helpers.
pub mod dom;

/// Ordered fallback chains and element rules.
pub mod selector;

/// Field extractors.
pub mod extractor;

/// Keyword-frequency business classification.
pub mod classifier;

/// URL validation, index-page derivation and link classification.
pub mod url_utils;

/// Response body charset detection and decoding.
pub mod encoding;

/// Page retrieval.
pub mod fetch;

/// JSON, CSV and plaintext export.
pub mod export;

/// HTTP transport.
#[cfg(feature = "server")]
pub mod server;

// Public API - re-exports
pub use dom::Page;
pub use error::{Error, Result};
pub use extract::{extract_profile, extract_profile_from_html, profile_fetched, profile_url};
pub use fetch::{Fetch, FetchedPage, HttpFetcher};
pub use options::{Options, DEFAULT_USER_AGENT};
pub use result::{
    Accessibility, ExtractionRecord, Faq, FormInfo, HeadingCounts, Media, MediaImage, MediaVideo,
    MenuItem, MobileOptimization, Navigation, PageStructure, Performance, Product,
    ResponseHeaders, Security, SeoInfo,
};
