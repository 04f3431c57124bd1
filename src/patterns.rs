//! Compiled regex patterns, selector priority lists and keyword tables.
//!
//! All patterns are compiled once at first use using `LazyLock`. Selector
//! lists are ordered: extractors walk them top to bottom and the first entry
//! that yields a qualifying result wins.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Contact Patterns
// =============================================================================

/// Matches `user@domain.tld` addresses in markup or text.
pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}").expect("EMAIL regex")
});

/// Phone patterns scanned over raw markup, in priority order.
///
/// 1. `tel:` link targets (capture group 1 holds the number)
/// 2. Area-code formatted numbers with optional country code
/// 3. Loosely separated long digit runs
/// 4. Bare 10-digit runs
pub static PHONE_MARKUP_CASCADE: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r#"(?i)href=['"]tel:([0-9+]+)['"]"#).expect("PHONE tel regex"),
        Regex::new(r"(\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
            .expect("PHONE area code regex"),
        Regex::new(r"(\+\d{1,3})?[-.\s]?\d{3,5}[-.\s]?\d{3}[-.\s]?\d{3,4}")
            .expect("PHONE loose regex"),
        Regex::new(r"\b\d{10}\b").expect("PHONE bare regex"),
    ]
});

/// Phone-like run in visible body text.
pub static PHONE_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\+?[\d\s\-()]{8,15})\b").expect("PHONE_TEXT regex")
});

/// A complete `<a ... href="tel:...">` anchor in raw markup.
pub static TEL_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a[^>]*href=["']tel:([0-9+]+)["'][^>]*>"#).expect("TEL_ANCHOR regex")
});

/// Phone numbers inside a contact container's text.
pub static CONTACT_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+\d{1,3}[-.\s]?)?(\(?\d{3}\)?[-.\s]?)?\d{3}[-.\s]?\d{4}")
        .expect("CONTACT_PHONE regex")
});

/// Minimum digit count (leading `+` included) for an accepted phone number.
pub const MIN_PHONE_LEN: usize = 8;

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

// =============================================================================
// Social Platforms
// =============================================================================

/// Known social platform hostnames, matched as substrings of `href`.
pub const SOCIAL_PLATFORMS: &[&str] = &[
    "facebook.com",
    "twitter.com",
    "instagram.com",
    "linkedin.com",
    "youtube.com",
    "pinterest.com",
    "tiktok.com",
    "snapchat.com",
    "reddit.com",
    "tumblr.com",
    "discord.gg",
    "medium.com",
    "github.com",
    "behance.net",
    "dribbble.com",
    "whatsapp.com",
    "telegram.org",
    "threads.net",
    "t.me",
];

/// Social-looking links by class name or ARIA label.
pub const SOCIAL_HINT_SELECTOR: &str = r#"a[class*="social"], a[class*="facebook"], a[class*="instagram"], a[class*="twitter"], a[class*="linkedin"], a[class*="youtube"], [aria-label*="Facebook"], [aria-label*="Instagram"], [aria-label*="Twitter"], [aria-label*="LinkedIn"], [aria-label*="YouTube"]"#;

// =============================================================================
// Business Classification
// =============================================================================

/// Category label and its whole-word trigger keywords, in tie-break order.
pub const BUSINESS_TYPES: &[(&str, &[&str])] = &[
    ("E-commerce", &["shop", "store", "buy", "purchase", "cart", "product"]),
    ("Blog", &["blog", "article", "post", "read", "news", "content"]),
    ("SaaS", &["software", "service", "platform", "solution", "cloud", "subscription"]),
    ("Local Business", &["local", "location", "hours", "visit", "store", "shop"]),
    ("Professional Service", &["service", "professional", "expert", "consultation", "appointment"]),
    ("Restaurant", &["food", "restaurant", "menu", "reservation", "dish", "eat"]),
    ("Educational", &["course", "learn", "education", "training", "school", "university"]),
];

/// Compiled `\bkeyword\b` matchers, one list per entry of [`BUSINESS_TYPES`].
pub static BUSINESS_KEYWORDS: LazyLock<Vec<(&'static str, Vec<Regex>)>> = LazyLock::new(|| {
    BUSINESS_TYPES
        .iter()
        .map(|(label, keywords)| {
            let matchers = keywords
                .iter()
                .map(|k| {
                    Regex::new(&format!(r"\b{}\b", regex::escape(k))).expect("keyword regex")
                })
                .collect();
            (*label, matchers)
        })
        .collect()
});

/// Label returned when no category reaches [`MIN_CATEGORY_HITS`].
pub const UNKNOWN_BUSINESS_TYPE: &str = "Unknown";

/// Minimum keyword hits for a category to be reported.
pub const MIN_CATEGORY_HITS: usize = 3;

// =============================================================================
// Selector Priority Lists
// =============================================================================

/// Address containers; the first whose text exceeds [`MIN_ADDRESS_LEN`] wins.
pub const ADDRESS_SELECTORS: &[&str] = &[
    "address",
    ".address",
    "#address",
    ".contact-address",
    ".location",
    "footer address",
    "footer .address",
    "div.address",
    r#"[itemprop="address"]"#,
];

/// Shorter address candidates are treated as false positives.
pub const MIN_ADDRESS_LEN: usize = 10;

/// "About" containers used as the last description fallback.
pub const ABOUT_SELECTOR: &str = "div.about, section.about, #about, .about-us, #about-us";

/// Product containers, tried in order until one yields products.
pub const PRODUCT_SELECTORS: &[&str] = &[
    ".product",
    ".product-item",
    ".product-card",
    ".product-container",
    ".productItem",
    ".item-product",
    ".woocommerce-product",
    ".shopify-product",
    r#"div[itemtype="http://schema.org/Product"]"#,
    r#"[class*="product"]"#,
];

/// Product name inside a product container.
pub const PRODUCT_NAME_SELECTOR: &str = "h2, h3, h4, .product-title, .product-name, .title";

/// Product price inside a product container.
pub const PRODUCT_PRICE_SELECTOR: &str = r#".price, .product-price, [class*="price"]"#;

/// Maximum number of products reported.
pub const MAX_PRODUCTS: usize = 10;

/// Service title selectors.
pub const SERVICE_TITLE_SELECTORS: &[&str] = &[
    ".services .service h3",
    ".services .service-item h3",
    ".services .service-box h3",
    ".services .service-title",
    ".service-section h3",
    "#services h3",
    ".services h3",
    ".services h4",
    "section.services .title",
    r#"[class*="service"] h3"#,
];

/// Service list-item selectors, used when no titles are found.
pub const SERVICE_LIST_SELECTORS: &[&str] = &[
    ".services li",
    "#services li",
    "section.services li",
    "div.service-list li",
];

/// JSON-LD script blocks.
pub const JSON_LD_SELECTOR: &str = r#"script[type="application/ld+json"]"#;

/// Accordion-style FAQ containers.
pub const FAQ_ITEM_SELECTOR: &str = r#".faq-item, .accordion-item, .question-answer, [class*="faq"]"#;

/// Question element inside an FAQ container.
pub const FAQ_QUESTION_SELECTOR: &str = ".question, .accordion-header, h3, h4";

/// Answer element inside an FAQ container.
pub const FAQ_ANSWER_SELECTOR: &str = ".answer, .accordion-content, .accordion-body, p";

/// Contact containers; every one is visited, earlier ones fill fields first.
pub const CONTACT_SELECTORS: &[&str] = &["#contact", ".contact", ".contact-us", ".contact-info", "footer"];

/// Address element inside a contact container.
pub const CONTACT_ADDRESS_SELECTOR: &str = r#"address, .address, [itemprop="address"]"#;

/// Opening-hours element inside a contact container.
pub const CONTACT_HOURS_SELECTOR: &str =
    r#".hours, .opening-hours, .business-hours, [itemprop="openingHours"]"#;

/// Navigation containers; the first yielding a link with text and href wins.
pub const NAVIGATION_SELECTORS: &[&str] = &["nav", "header ul", ".menu", "#menu", ".nav", ".navigation"];

/// Maximum number of menu items reported.
pub const MAX_MENU_ITEMS: usize = 15;

/// Language-switcher anchors.
pub const LANGUAGE_SWITCHER_SELECTOR: &str =
    r#"a[href*="lang="], .language-switcher a, .lang-switcher a, [class*="language"] a"#;

/// Longest value accepted as a language code from a switcher link.
pub const MAX_LANGUAGE_LEN: usize = 5;

/// Maximum number of images reported in the media block.
pub const MAX_MEDIA_IMAGES: usize = 10;

/// Maximum number of videos reported in the media block.
pub const MAX_MEDIA_VIDEOS: usize = 5;

/// Number of body-text characters sampled for the excerpt and classifier.
pub const BODY_SAMPLE_CHARS: usize = 1000;
