//! Result types for profile output.
//!
//! The record's field set is fixed: every field is present whether or not its
//! extractor found anything, holding an empty string, empty list, `false` or
//! zero in that case. Serialized keys are camelCase.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Lower-cased response header name to value, from the primary fetch only.
pub type ResponseHeaders = HashMap<String, String>;

/// Structured business profile derived from one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRecord {
    /// Page title, primary page first, index page as fallback.
    pub website_title: String,

    /// Business category label or `"Unknown"`.
    pub business_type: String,

    /// Meta description, first paragraph, or "about" block text.
    pub description: String,

    pub email: String,

    /// Digits only, with an optional leading `+`.
    pub phone: String,

    pub address: String,

    /// Absolute social profile URLs, exact-string deduplicated.
    pub social_media: Vec<String>,

    pub seo_info: SeoInfo,

    /// Detected technology labels, in detection order.
    pub technologies: Vec<String>,

    pub page_structure: PageStructure,

    pub performance: Performance,

    pub security: Security,

    pub accessibility: Accessibility,

    pub media: Media,

    pub navigation: Navigation,

    pub mobile_optimization: MobileOptimization,

    pub forms: Vec<FormInfo>,

    /// At most 10 products in document order.
    pub products: Vec<Product>,

    pub services: Vec<String>,

    pub faqs: Vec<Faq>,

    /// Keys drawn from `email`, `phone`, `address`, `hours`.
    pub contact_info: BTreeMap<String, String>,

    pub privacy_policy: bool,

    pub terms_of_service: bool,

    /// `html[lang]` first, then language-switcher values.
    pub languages: Vec<String>,

    /// First 1000 characters of body text, whitespace-collapsed.
    pub raw_content_excerpt: String,

    /// Reserved for future fields; always empty.
    pub other_info: BTreeMap<String, String>,
}

/// SEO metadata block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoInfo {
    pub title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub canonical_url: String,

    /// `og:*` properties with the prefix stripped.
    pub og_tags: BTreeMap<String, String>,

    /// `twitter:*` names with the prefix stripped.
    pub twitter_tags: BTreeMap<String, String>,

    pub headings: HeadingCounts,

    /// Number of `<img>` elements carrying an `alt` attribute.
    pub img_alt_tags: usize,

    /// Number of `<img>` elements without an `alt` attribute.
    pub img_missing_alt: usize,
}

/// Heading element counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
}

/// Layout landmarks and link/image counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStructure {
    pub has_header: bool,
    pub has_footer: bool,
    pub has_navigation: bool,
    pub has_slider: bool,
    pub has_sidebar: bool,
    pub has_cookie_banner: bool,
    pub total_links: usize,
    pub internal_links: usize,
    pub external_links: usize,
    pub total_images: usize,
}

/// Resource counts plus a few response headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub total_scripts: usize,
    pub total_stylesheets: usize,
    pub total_images: usize,
    pub total_iframes: usize,
    pub lazy_load_images: usize,

    /// `server`, `cacheControl` and `contentEncoding`.
    pub response_headers: BTreeMap<String, String>,
}

/// Security headers and credential-form signals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Security {
    pub has_https: bool,
    pub has_csp: bool,
    pub has_xss_protection: bool,
    pub has_hsts: bool,
    pub password_fields: bool,
    pub captcha_present: bool,
    pub login_form: bool,
}

/// Accessibility attribute probes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessibility {
    pub has_aria_labels: bool,
    pub has_aria_describedby: bool,
    pub has_aria_live: bool,

    /// Count of images with `alt`.
    pub has_alt_text: usize,

    /// Count of images without `alt`.
    pub missing_alt_text: usize,

    pub has_skip_links: bool,
    pub has_language_attribute: bool,
    pub has_tab_index: bool,
}

/// An image reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaImage {
    pub src: String,
    pub alt: String,
}

/// A video or video embed reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaVideo {
    pub src: String,
}

/// Media inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    /// At most 10.
    pub images: Vec<MediaImage>,

    /// At most 5.
    pub videos: Vec<MediaVideo>,

    pub has_audio: bool,
    pub has_video: bool,
    pub has_embedded_content: bool,
    #[serde(rename = "hasYouTube")]
    pub has_youtube: bool,
    pub has_vimeo: bool,
}

/// A navigation link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub text: String,
    pub href: String,
}

/// Site navigation summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    /// At most 15.
    pub menu_items: Vec<MenuItem>,
    pub has_dropdown_menu: bool,
    pub has_mobile_menu: bool,
    pub has_breadcrumbs: bool,
}

/// Mobile-friendliness signals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileOptimization {
    pub has_viewport_meta: bool,
    pub responsive_meta_content: String,
    pub has_mobile_specific_classes: bool,
    pub has_media_queries: bool,
    pub uses_flexbox: bool,
    pub uses_grid: bool,
}

/// A form and its classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInfo {
    #[serde(rename = "type")]
    pub form_type: String,

    /// Number of input, select and textarea descendants.
    pub fields: usize,
}

/// A product listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

/// A question and its answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}
