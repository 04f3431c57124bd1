//! DOM Operations Adapter
//!
//! Thin query layer over the `dom_query` crate. Field extractors only talk to
//! the document through these functions and [`Page`], so the parser backend
//! can change without touching extraction rules.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

use url::Url;

/// A fetched page: the parsed document plus the markup it was built from.
///
/// Pages are read-only once constructed. The optional URL is the address the
/// markup was served from (after redirects) and is only consulted by probes
/// that cannot be answered from markup alone.
pub struct Page {
    document: Document,
    raw: String,
    url: Option<Url>,
}

impl Page {
    /// Parse markup that has no known origin.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            document: parse(html),
            raw: html.to_string(),
            url: None,
        }
    }

    /// Parse markup served from `url`. Unparseable URLs are dropped.
    #[must_use]
    pub fn parse_with_url(html: &str, url: &str) -> Self {
        Self {
            document: parse(html),
            raw: html.to_string(),
            url: Url::parse(url).ok(),
        }
    }

    /// The parsed document.
    #[inline]
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The original markup.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The URL the page was served from, if known.
    #[inline]
    #[must_use]
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Select all elements matching a CSS selector in document order.
    #[inline]
    #[must_use]
    pub fn select(&self, selector: &str) -> Selection<'_> {
        self.document.select(selector)
    }

    /// Number of elements matching a selector.
    #[inline]
    #[must_use]
    pub fn count(&self, selector: &str) -> usize {
        self.document.select(selector).length()
    }

    /// Whether any element matches a selector.
    #[inline]
    #[must_use]
    pub fn exists(&self, selector: &str) -> bool {
        self.document.select(selector).exists()
    }

    /// Attribute of the first element matching `selector`.
    #[must_use]
    pub fn attr(&self, selector: &str, name: &str) -> Option<String> {
        get_attribute(&self.document.select(selector).first(), name)
    }

    /// Concatenated text of every `<body>`, untrimmed.
    #[must_use]
    pub fn body_text(&self) -> String {
        text_content(&self.document.select("body")).to_string()
    }

    /// Trimmed text of the `<title>` element(s).
    #[must_use]
    pub fn title(&self) -> String {
        trimmed_text(&self.document.select("title"))
    }
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute value, treating empty values as absent
#[must_use]
pub fn non_empty_attribute(sel: &Selection, name: &str) -> Option<String> {
    get_attribute(sel, name).filter(|v| !v.is_empty())
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content with surrounding whitespace removed
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    sel.text().trim().to_string()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

// === Querying ===

/// Query all elements by CSS selector
#[inline]
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select(selector)
}

/// First descendant (document order) matching any part of a selector group
#[inline]
#[must_use]
pub fn query_first<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select(selector).first()
}

/// Split a selection into one selection per matched element
#[must_use]
pub fn elements<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
