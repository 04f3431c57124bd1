//! Technology fingerprinting.
//!
//! Each recognized technology is a label plus a probe over the page. Probes
//! run in table order and the result lists every label whose probe fired,
//! followed by verbatim `Server` / `X-Powered-By` header labels.

use crate::dom::{self, Page};
use crate::result::ResponseHeaders;
use crate::selector::push_unique;

/// A presence probe for one technology.
pub type Probe = fn(&Page) -> bool;

/// Recognized technologies in reporting order.
pub const TECHNOLOGY_PROBES: &[(&str, Probe)] = &[
    ("jQuery", has_jquery),
    ("Bootstrap", has_bootstrap),
    ("React", has_react),
    ("Vue.js", has_vue),
    ("Angular", has_angular),
    ("GSAP", has_gsap),
    ("Google Analytics", has_google_analytics),
    ("Facebook Pixel", has_facebook_pixel),
    ("WordPress", has_wordpress),
    ("Shopify", has_shopify),
    ("Drupal", has_drupal),
    ("Joomla", has_joomla),
    ("Wix", has_wix),
];

fn has_jquery(page: &Page) -> bool {
    page.exists(r#"script[src*="jquery"]"#)
}

fn has_bootstrap(page: &Page) -> bool {
    page.exists(r#"script[src*="bootstrap"], link[href*="bootstrap"]"#)
}

fn has_react(page: &Page) -> bool {
    page.exists(r#"script[src*="react"]"#)
}

fn has_vue(page: &Page) -> bool {
    page.exists(r#"script[src*="vue"]"#)
}

fn has_angular(page: &Page) -> bool {
    page.exists(r#"script[src*="angular"]"#)
}

fn has_gsap(page: &Page) -> bool {
    page.exists(r#"script[src*="gsap"]"#)
}

fn has_google_analytics(page: &Page) -> bool {
    page.exists(r#"script[src*="google-analytics"], script[src*="gtag"]"#)
        || inline_script_contains(page, "gtag")
}

fn has_facebook_pixel(page: &Page) -> bool {
    page.exists(r#"script[src*="facebook"]"#) || inline_script_contains(page, "fbq")
}

fn has_wordpress(page: &Page) -> bool {
    generator_contains(page, "WordPress") || page.exists(r#"link[rel="https://api.w.org/"]"#)
}

fn has_shopify(page: &Page) -> bool {
    page.exists(r#"script[src*="shopify"], link[href*="shopify"]"#)
}

fn has_drupal(page: &Page) -> bool {
    generator_contains(page, "Drupal")
}

fn has_joomla(page: &Page) -> bool {
    generator_contains(page, "Joomla")
}

fn has_wix(page: &Page) -> bool {
    generator_contains(page, "Wix") || page.exists(r#"script[src*="wix.com"]"#)
}

/// Whether any `<script>` element's text contains `needle`.
fn inline_script_contains(page: &Page, needle: &str) -> bool {
    dom::elements(&page.select("script"))
        .iter()
        .any(|script| dom::text_content(script).contains(needle))
}

/// Whether a `meta[name=generator]` content mentions `needle`.
fn generator_contains(page: &Page, needle: &str) -> bool {
    page.exists(&format!(r#"meta[name="generator"][content*="{needle}"]"#))
}

/// Detected technology labels, deduplicated, in table order then header order.
#[must_use]
pub fn detect_technologies(page: &Page, headers: &ResponseHeaders) -> Vec<String> {
    let mut labels = Vec::new();

    for (label, probe) in TECHNOLOGY_PROBES {
        if probe(page) {
            push_unique(&mut labels, (*label).to_string());
        }
    }

    if let Some(server) = headers.get("server") {
        push_unique(&mut labels, format!("Server: {server}"));
    }
    if let Some(powered_by) = headers.get("x-powered-by") {
        push_unique(&mut labels, format!("Powered by: {powered_by}"));
    }

    labels
}
