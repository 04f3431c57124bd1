//! Business Classification
//!
//! Keyword-frequency scoring over a short text sample. Each category scores the
//! number of whole-word keyword occurrences; the highest score wins, and a
//! winner with fewer than [`MIN_CATEGORY_HITS`] hits is reported as unknown.

use crate::patterns::{BUSINESS_KEYWORDS, MIN_CATEGORY_HITS, UNKNOWN_BUSINESS_TYPE};

/// Transient per-category score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryScore {
    pub label: &'static str,
    pub count: usize,
}

/// Lower-cased classifier sample: title, meta description and body sample joined by spaces.
#[must_use]
pub fn classification_sample(title: &str, meta_description: &str, body_sample: &str) -> String {
    format!("{title} {meta_description} {body_sample}").to_lowercase()
}

/// Keyword hit count for every category, in table order.
#[must_use]
pub fn score_categories(sample: &str) -> Vec<CategoryScore> {
    BUSINESS_KEYWORDS
        .iter()
        .map(|(label, matchers)| CategoryScore {
            label: *label,
            count: matchers.iter().map(|re| re.find_iter(sample).count()).sum(),
        })
        .collect()
}

/// Best category label for the sample, or `"Unknown"`.
///
/// Ties keep the earlier category in table order.
///
/// # Example
///
/// ```rust
/// use rs_siteprofile::classifier::classify_business;
///
/// let label = classify_business("Acme Shop", "Buy tools online", "Add to cart. Shop now and buy.");
/// assert_eq!(label, "E-commerce");
/// assert_eq!(classify_business("Hello", "", "Nothing here."), "Unknown");
/// ```
#[must_use]
pub fn classify_business(title: &str, meta_description: &str, body_sample: &str) -> String {
    let sample = classification_sample(title, meta_description, body_sample);

    let mut best: Option<CategoryScore> = None;
    for score in score_categories(&sample) {
        if best.is_none_or(|b| score.count > b.count) {
            best = Some(score);
        }
    }

    match best {
        Some(score) if score.count >= MIN_CATEGORY_HITS => score.label.to_string(),
        _ => UNKNOWN_BUSINESS_TYPE.to_string(),
    }
}
