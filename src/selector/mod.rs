//! Fallback Chains
//!
//! Ordered selector lists are data; these routines are the single algorithm
//! that consumes them. A chain is walked top to bottom and the first entry
//! producing a qualifying result wins, later entries are never consulted.
//!
//! Element rules are plain predicates over a `Selection`, used where a probe
//! needs more than a CSS selector can express (text matching, mostly).

use dom_query::Selection;

use crate::dom::{self, Page};

/// A rule that tests if a single element matches certain criteria.
pub type Rule = fn(&Selection) -> bool;

/// Trimmed text of the first element matched by the first selector whose text qualifies.
///
/// Only the first element of each selector is examined. A selector whose first
/// match fails `qualifies` is skipped and the chain continues.
///
/// # Example
///
/// ```rust
/// use rs_siteprofile::dom::Page;
/// use rs_siteprofile::selector;
///
/// let page = Page::parse(r#"<p class="a">short</p><p class="b">long enough text</p>"#);
/// let found = selector::first_qualifying_text(&page, &[".a", ".b"], |t| t.len() > 10);
/// assert_eq!(found.as_deref(), Some("long enough text"));
/// ```
#[must_use]
pub fn first_qualifying_text<F>(page: &Page, selectors: &[&str], qualifies: F) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    selectors.iter().find_map(|selector| {
        let text = dom::trimmed_text(&page.select(selector).first());
        qualifies(&text).then_some(text)
    })
}

/// Results of the first selector for which `collect` returns anything.
///
/// `collect` receives every element matched by one selector and decides which
/// of them qualify. An empty result moves the chain to the next selector.
#[must_use]
pub fn first_nonempty<'a, T, F>(page: &'a Page, selectors: &[&str], mut collect: F) -> Vec<T>
where
    F: FnMut(Vec<Selection<'a>>) -> Vec<T>,
{
    for selector in selectors {
        let found = collect(dom::elements(&page.select(selector)));
        if !found.is_empty() {
            return found;
        }
    }
    Vec::new()
}

/// First candidate that is not an empty string, or an empty string.
#[must_use]
pub fn first_non_empty<I>(candidates: I) -> String
where
    I: IntoIterator<Item = String>,
{
    candidates
        .into_iter()
        .find(|c| !c.is_empty())
        .unwrap_or_default()
}

/// Query for the first element matched by `selector` that satisfies the rule.
#[must_use]
pub fn query<'a>(page: &'a Page, selector: &str, rule: Rule) -> Option<Selection<'a>> {
    dom::elements(&page.select(selector))
        .into_iter()
        .find(|sel| rule(sel))
}

/// Whether any element matched by `selector` satisfies the rule.
#[must_use]
pub fn any(page: &Page, selector: &str, rule: Rule) -> bool {
    query(page, selector, rule).is_some()
}

/// Push `value` unless an identical string is already present.
///
/// Keeps first-seen order, which is what every list field reports.
pub fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}
