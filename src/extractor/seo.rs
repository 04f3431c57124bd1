//! SEO metadata, description and page-level text fields.

use std::collections::BTreeMap;

use crate::dom::{self, Page};
use crate::patterns::{
    ABOUT_SELECTOR, BODY_SAMPLE_CHARS, LANGUAGE_SWITCHER_SELECTOR, MAX_LANGUAGE_LEN,
    WHITESPACE_NORMALIZE,
};
use crate::result::{HeadingCounts, SeoInfo};
use crate::selector::{self, push_unique};

/// Content of `<meta name="description">`, or empty.
#[must_use]
pub fn meta_description(page: &Page) -> String {
    page.attr(r#"meta[name="description"]"#, "content")
        .unwrap_or_default()
}

/// SEO block: title, meta tags, canonical URL, heading and alt counts, OG and Twitter maps.
#[must_use]
pub fn extract_seo_info(page: &Page) -> SeoInfo {
    SeoInfo {
        title: page.title(),
        meta_description: meta_description(page),
        meta_keywords: page
            .attr(r#"meta[name="keywords"]"#, "content")
            .unwrap_or_default(),
        canonical_url: canonical_url(page),
        og_tags: prefixed_meta(page, "property", "og:"),
        twitter_tags: prefixed_meta(page, "name", "twitter:"),
        headings: HeadingCounts {
            h1: page.count("h1"),
            h2: page.count("h2"),
            h3: page.count("h3"),
        },
        img_alt_tags: page.count("img[alt]"),
        img_missing_alt: page.count("img:not([alt])"),
    }
}

/// `href` of `<link rel="canonical">`, or empty.
#[must_use]
pub fn canonical_url(page: &Page) -> String {
    page.attr(r#"link[rel="canonical"]"#, "href")
        .unwrap_or_default()
}

/// Meta elements whose `attribute` starts with `prefix`, keyed with the prefix removed.
///
/// Elements without content are skipped; later duplicates overwrite earlier ones.
fn prefixed_meta(page: &Page, attribute: &str, prefix: &str) -> BTreeMap<String, String> {
    let mut tags = BTreeMap::new();
    let selector = format!(r#"meta[{attribute}^="{prefix}"]"#);

    for meta in dom::elements(&page.select(&selector)) {
        let (Some(key), Some(content)) = (
            dom::non_empty_attribute(&meta, attribute),
            dom::non_empty_attribute(&meta, "content"),
        ) else {
            continue;
        };
        let key = key.strip_prefix(prefix).unwrap_or(&key).to_string();
        tags.insert(key, content);
    }

    tags
}

/// Meta description, else first paragraph, else the "about" block; first non-empty wins.
#[must_use]
pub fn extract_description(page: &Page) -> String {
    selector::first_non_empty([
        meta_description(page),
        dom::trimmed_text(&page.select("p").first()),
        dom::trimmed_text(&page.select(ABOUT_SELECTOR)),
    ])
}

/// The first [`BODY_SAMPLE_CHARS`] characters of body text, untrimmed.
#[must_use]
pub fn body_sample(page: &Page) -> String {
    page.body_text().chars().take(BODY_SAMPLE_CHARS).collect()
}

/// Body sample with whitespace runs collapsed to single spaces and trimmed.
#[must_use]
pub fn extract_content_excerpt(page: &Page) -> String {
    WHITESPACE_NORMALIZE
        .replace_all(&body_sample(page), " ")
        .trim()
        .to_string()
}

/// Whether any link points at or mentions a privacy policy.
#[must_use]
pub fn has_privacy_policy(page: &Page) -> bool {
    has_link_mentioning(page, "privacy")
}

/// Whether any link points at or mentions terms of service.
#[must_use]
pub fn has_terms_of_service(page: &Page) -> bool {
    has_link_mentioning(page, "terms")
}

fn has_link_mentioning(page: &Page, needle: &str) -> bool {
    dom::elements(&page.select("a")).iter().any(|anchor| {
        let href = dom::get_attribute(anchor, "href").unwrap_or_default();
        href.to_lowercase().contains(needle)
            || dom::text_content(anchor).to_lowercase().contains(needle)
    })
}

/// Page languages: `html[lang]` first, then short codes from language-switcher links.
#[must_use]
pub fn detect_languages(page: &Page) -> Vec<String> {
    let mut languages = Vec::new();

    if let Some(lang) = page.attr("html", "lang").filter(|l| !l.is_empty()) {
        languages.push(lang);
    }

    for anchor in dom::elements(&page.select(LANGUAGE_SWITCHER_SELECTOR)) {
        let lang = dom::non_empty_attribute(&anchor, "hreflang")
            .or_else(|| dom::non_empty_attribute(&anchor, "lang"))
            .unwrap_or_else(|| dom::trimmed_text(&anchor));
        if !lang.is_empty() && lang.chars().count() <= MAX_LANGUAGE_LEN {
            push_unique(&mut languages, lang);
        }
    }

    languages
}
