//! Profile assembly.
//!
//! [`profile_url`] is the two-phase request: fetch the primary page and,
//! when one can be derived, the secondary `index.html` page; then parse both
//! and run every field extractor. Parsing and extraction are synchronous and
//! happen after the last await, so no document is held across a suspension
//! point.

use std::time::Instant;

use tracing::debug;

use crate::classifier::classify_business;
use crate::dom::Page;
use crate::extractor::{self, seo};
use crate::fetch::{Fetch, FetchedPage};
use crate::result::{ExtractionRecord, ResponseHeaders};
use crate::selector::{first_non_empty, push_unique};
use crate::url_utils::{index_page_url, parse_url};
use crate::{Error, Options, Result};

/// Fetch `url` (and its index page) and build the profile.
///
/// The input is trimmed first. A failed index fetch is not an error: the
/// primary page stands in for it.
///
/// # Errors
///
/// - [`Error::MissingUrl`] for an empty or blank URL
/// - [`Error::InvalidUrl`] when the URL is not absolute http(s)
/// - [`Error::Fetch`] / [`Error::HttpStatus`] when the primary page cannot be retrieved
pub async fn profile_url<F>(fetcher: &F, url: &str, options: &Options) -> Result<ExtractionRecord>
where
    F: Fetch + ?Sized,
{
    let url = url.trim();
    if url.is_empty() {
        return Err(Error::MissingUrl);
    }
    if parse_url(url).is_none() {
        return Err(Error::InvalidUrl(url.to_string()));
    }

    let primary = fetcher.fetch(url).await?;

    let mut index = None;
    if options.fetch_index_page {
        if let Some(index_url) = index_page_url(url) {
            match fetcher.fetch(&index_url).await {
                Ok(page) => index = Some(page),
                Err(err) => debug!(url = %index_url, error = %err, "index page unavailable, using primary"),
            }
        }
    }

    Ok(profile_fetched(&primary, index.as_ref()))
}

/// Parse fetched pages and build the profile. The primary page doubles as the index when absent.
#[must_use]
pub fn profile_fetched(primary: &FetchedPage, index: Option<&FetchedPage>) -> ExtractionRecord {
    let primary_page = Page::parse_with_url(&primary.body, &primary.url);
    let index_page = index.map(|p| Page::parse_with_url(&p.body, &p.url));

    extract_profile(
        &primary_page,
        index_page.as_ref().unwrap_or(&primary_page),
        &primary.headers,
    )
}

/// Build a profile from markup alone, using it as both primary and index document.
///
/// # Example
///
/// ```rust
/// use rs_siteprofile::{extract_profile_from_html, ResponseHeaders};
///
/// let html = r#"<html><head><title>Acme</title></head>
/// <body><a href="mailto:info@acme.test">Mail</a></body></html>"#;
///
/// let record = extract_profile_from_html(html, &ResponseHeaders::new());
/// assert_eq!(record.website_title, "Acme");
/// assert_eq!(record.email, "info@acme.test");
/// ```
#[must_use]
pub fn extract_profile_from_html(html: &str, headers: &ResponseHeaders) -> ExtractionRecord {
    let page = Page::parse(html);
    extract_profile(&page, &page, headers)
}

/// Run every field extractor and merge the two documents' results.
///
/// - title: primary first, index as fallback
/// - phone: index first, primary as fallback
/// - email and address: primary first, index as fallback
/// - social links: primary then index, deduplicated
///
/// Every other field, and the business classification, comes from the primary page.
#[must_use]
pub fn extract_profile(primary: &Page, index: &Page, headers: &ResponseHeaders) -> ExtractionRecord {
    let start = Instant::now();

    let mut social_media = extractor::extract_social_media(primary);
    for link in extractor::extract_social_media(index) {
        push_unique(&mut social_media, link);
    }

    let business_type = classify_business(
        &primary.title(),
        &seo::meta_description(primary),
        &seo::body_sample(primary),
    );

    let record = ExtractionRecord {
        website_title: first_non_empty([primary.title(), index.title()]),
        business_type,
        description: extractor::extract_description(primary),
        email: first_non_empty([extractor::extract_email(primary), extractor::extract_email(index)]),
        phone: first_non_empty([extractor::extract_phone(index), extractor::extract_phone(primary)]),
        address: first_non_empty([
            extractor::extract_address(primary),
            extractor::extract_address(index),
        ]),
        social_media,
        seo_info: extractor::extract_seo_info(primary),
        technologies: extractor::detect_technologies(primary, headers),
        page_structure: extractor::analyze_page_structure(primary),
        performance: extractor::analyze_performance(primary, headers),
        security: extractor::analyze_security(primary, headers),
        accessibility: extractor::check_accessibility(primary),
        media: extractor::extract_media(primary),
        navigation: extractor::extract_navigation(primary),
        mobile_optimization: extractor::check_mobile_optimization(primary),
        forms: extractor::extract_forms(primary),
        products: extractor::extract_products(primary),
        services: extractor::extract_services(primary),
        faqs: extractor::extract_faqs(primary),
        contact_info: extractor::extract_contact_info(primary),
        privacy_policy: extractor::has_privacy_policy(primary),
        terms_of_service: extractor::has_terms_of_service(primary),
        languages: extractor::detect_languages(primary),
        raw_content_excerpt: extractor::extract_content_excerpt(primary),
        other_info: std::collections::BTreeMap::new(),
    };

    debug!(
        elapsed_ms = start.elapsed().as_millis(),
        business_type = %record.business_type,
        "profile extracted"
    );

    record
}
