//! Fixed probe bundles: page structure, performance, security, accessibility
//! and mobile optimization.
//!
//! Every probe is independent. The only shared input is the canonical URL,
//! which bounds internal versus external links.

use std::collections::BTreeMap;

use dom_query::Selection;

use crate::dom::{self, Page};
use crate::result::{
    Accessibility, MobileOptimization, PageStructure, Performance, ResponseHeaders, Security,
};
use crate::selector;
use crate::url_utils;

use super::seo::canonical_url;

/// Value reported for a response header that was not sent.
pub const HEADER_NOT_SPECIFIED: &str = "Not specified";

/// Landmark presence plus link and image counts.
#[must_use]
pub fn analyze_page_structure(page: &Page) -> PageStructure {
    let canonical = canonical_url(page);
    let hrefs: Vec<String> = dom::elements(&page.select("a[href]"))
        .iter()
        .filter_map(|a| dom::get_attribute(a, "href"))
        .collect();

    PageStructure {
        has_header: page.exists("header, #header, .header"),
        has_footer: page.exists("footer, #footer, .footer"),
        has_navigation: page.exists("nav, #nav, .nav, ul.menu"),
        has_slider: page.exists(".slider, .carousel, .slideshow"),
        has_sidebar: page.exists("aside, .sidebar, #sidebar"),
        has_cookie_banner: page.exists("#cookie-banner, .cookie-banner")
            || selector::any(page, "div", mentions_cookie),
        total_links: page.count("a"),
        internal_links: hrefs
            .iter()
            .filter(|href| url_utils::is_internal_link(href, &canonical))
            .count(),
        external_links: hrefs
            .iter()
            .filter(|href| url_utils::is_external_link(href, &canonical))
            .count(),
        total_images: page.count("img"),
    }
}

fn mentions_cookie(sel: &Selection) -> bool {
    dom::text_content(sel).contains("cookie")
}

/// Resource counts and the cache-relevant response headers.
#[must_use]
pub fn analyze_performance(page: &Page, headers: &ResponseHeaders) -> Performance {
    let header = |name: &str| {
        headers
            .get(name)
            .cloned()
            .unwrap_or_else(|| HEADER_NOT_SPECIFIED.to_string())
    };

    let response_headers = BTreeMap::from([
        ("server".to_string(), header("server")),
        ("cacheControl".to_string(), header("cache-control")),
        ("contentEncoding".to_string(), header("content-encoding")),
    ]);

    Performance {
        total_scripts: page.count("script"),
        total_stylesheets: page.count(r#"link[rel="stylesheet"]"#),
        total_images: page.count("img"),
        total_iframes: page.count("iframe"),
        lazy_load_images: page.count(r#"img[loading="lazy"]"#),
        response_headers,
    }
}

/// Security headers, transport and credential-form signals.
///
/// `hasHttps` reflects the scheme the page was served over; pages without a
/// known URL fall back to the presence of an HSTS header.
#[must_use]
pub fn analyze_security(page: &Page, headers: &ResponseHeaders) -> Security {
    let has_hsts = headers.contains_key("strict-transport-security");
    let has_https = page
        .url()
        .map_or(has_hsts, |url| url.scheme() == "https");

    Security {
        has_https,
        has_csp: headers.contains_key("content-security-policy"),
        has_xss_protection: headers.contains_key("x-xss-protection"),
        has_hsts,
        password_fields: page.exists(r#"input[type="password"]"#),
        captcha_present: page.exists(r#"div.g-recaptcha, .recaptcha, [class*="captcha"]"#),
        login_form: selector::any(page, "form", has_password_input),
    }
}

fn has_password_input(form: &Selection) -> bool {
    form.select(r#"input[type="password"]"#).exists()
}

/// ARIA, alt text, skip link, language and tab-order probes.
#[must_use]
pub fn check_accessibility(page: &Page) -> Accessibility {
    Accessibility {
        has_aria_labels: page.exists("[aria-label]"),
        has_aria_describedby: page.exists("[aria-describedby]"),
        has_aria_live: page.exists("[aria-live]"),
        has_alt_text: page.count("img[alt]"),
        missing_alt_text: page.count("img:not([alt])"),
        has_skip_links: page.exists(r##"a[href^="#main"], a[href^="#content"]"##)
            || selector::any(page, "a", is_skip_link),
        has_language_attribute: page.exists("html[lang]"),
        has_tab_index: page.exists("[tabindex]"),
    }
}

fn is_skip_link(anchor: &Selection) -> bool {
    dom::text_content(anchor).contains("Skip to")
}

/// Viewport, responsive class and CSS layout signals.
#[must_use]
pub fn check_mobile_optimization(page: &Page) -> MobileOptimization {
    let styles = dom::text_content(&page.select("style"));

    MobileOptimization {
        has_viewport_meta: page.exists(r#"meta[name="viewport"]"#),
        responsive_meta_content: page
            .attr(r#"meta[name="viewport"]"#, "content")
            .unwrap_or_default(),
        has_mobile_specific_classes: page.exists(
            r#"[class*="mobile"], [class*="sm-"], [class*="md-"], [class*="lg-"]"#,
        ),
        has_media_queries: styles.contains("@media") || page.exists("link[media]"),
        uses_flexbox: page.exists(r#"[style*="display: flex"], [style*="display:flex"]"#)
            || styles.contains("display: flex"),
        uses_grid: page.exists(r#"[style*="display: grid"], [style*="display:grid"]"#)
            || styles.contains("display: grid"),
    }
}
