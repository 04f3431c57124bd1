//! Contact field extractors: email, phone, address, contact block and social links.

use std::collections::BTreeMap;

use crate::dom::{self, Page};
use crate::patterns::{
    ADDRESS_SELECTORS, CONTACT_ADDRESS_SELECTOR, CONTACT_HOURS_SELECTOR, CONTACT_PHONE,
    CONTACT_SELECTORS, EMAIL, MIN_ADDRESS_LEN, MIN_PHONE_LEN, PHONE_MARKUP_CASCADE, PHONE_TEXT,
    SOCIAL_HINT_SELECTOR, SOCIAL_PLATFORMS, TEL_ANCHOR,
};
use crate::selector::{self, push_unique};
use crate::url_utils;

/// First email address on the page.
///
/// The body markup is scanned first, so obfuscated display text and attribute
/// values are caught; the first `mailto:` target is the fallback, cut at any
/// query string.
#[must_use]
pub fn extract_email(page: &Page) -> String {
    let markup = dom::inner_html(&page.select("body"));
    if let Some(found) = EMAIL.find(&markup) {
        return found.as_str().to_string();
    }

    page.attr(r#"a[href^="mailto:"]"#, "href")
        .map(|href| {
            let address = href.strip_prefix("mailto:").unwrap_or(&href);
            address.split('?').next().unwrap_or_default().to_string()
        })
        .unwrap_or_default()
}

/// First phone number on the page, normalized to digits with an optional leading `+`.
///
/// Patterns are tried in priority order over the raw markup (`tel:` targets,
/// area-code formats, loose digit runs, bare 10-digit runs), then over the
/// visible body text, then a full `tel:` anchor. Only the first match of each
/// pattern is considered and it is accepted only if it normalizes to at least
/// eight characters.
#[must_use]
pub fn extract_phone(page: &Page) -> String {
    let raw = page.raw();

    for pattern in PHONE_MARKUP_CASCADE.iter() {
        let Some(caps) = pattern.captures(raw) else {
            continue;
        };
        // The tel: pattern captures the number itself; the others use the whole match.
        let candidate = caps
            .get(1)
            .filter(|_| pattern.as_str().contains("tel:"))
            .or_else(|| caps.get(0))
            .map_or("", |m| m.as_str());
        if let Some(phone) = accept_phone(candidate) {
            return phone;
        }
    }

    let text = page.body_text();
    if let Some(phone) = PHONE_TEXT.find(&text).and_then(|m| accept_phone(m.as_str())) {
        return phone;
    }

    TEL_ANCHOR
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| accept_phone(m.as_str()))
        .unwrap_or_default()
}

/// Strip everything but digits, keeping a `+` only ahead of the first digit.
#[must_use]
pub fn normalize_phone(candidate: &str) -> String {
    let mut phone = String::with_capacity(candidate.len());
    for c in candidate.chars() {
        if c.is_ascii_digit() {
            phone.push(c);
        } else if c == '+' && phone.is_empty() {
            phone.push(c);
        }
    }
    phone
}

fn accept_phone(candidate: &str) -> Option<String> {
    let phone = normalize_phone(candidate);
    (phone.len() >= MIN_PHONE_LEN).then_some(phone)
}

/// First address container whose trimmed text is longer than ten characters.
#[must_use]
pub fn extract_address(page: &Page) -> String {
    selector::first_qualifying_text(page, ADDRESS_SELECTORS, |text| {
        text.chars().count() > MIN_ADDRESS_LEN
    })
    .unwrap_or_default()
}

/// Email, phone, address and opening hours found inside contact containers.
///
/// Every container is visited in order; each key is filled by the first
/// container that yields a value for it.
#[must_use]
pub fn extract_contact_info(page: &Page) -> BTreeMap<String, String> {
    let mut info = BTreeMap::new();

    for container in CONTACT_SELECTORS {
        let section = page.select(container);
        if !section.exists() {
            continue;
        }
        let text = dom::text_content(&section);

        if let Some(found) = EMAIL.find(&text) {
            info.entry("email".to_string())
                .or_insert_with(|| found.as_str().to_string());
        }
        if let Some(found) = CONTACT_PHONE.find(&text) {
            info.entry("phone".to_string())
                .or_insert_with(|| found.as_str().to_string());
        }

        for (key, sub_selector) in [
            ("address", CONTACT_ADDRESS_SELECTOR),
            ("hours", CONTACT_HOURS_SELECTOR),
        ] {
            if info.contains_key(key) {
                continue;
            }
            let value = dom::trimmed_text(&dom::query_first(&section, sub_selector));
            if !value.is_empty() {
                info.insert(key.to_string(), value);
            }
        }
    }

    info
}

/// Social profile links in document order, exact-string deduplicated.
///
/// Anchors pointing at a known platform come first, made absolute. Links that
/// only look social (class name or ARIA label) are added afterwards when they
/// are absolute and not in-page fragments.
#[must_use]
pub fn extract_social_media(page: &Page) -> Vec<String> {
    let mut links = Vec::new();

    for anchor in dom::elements(&page.select("a")) {
        let Some(href) = dom::non_empty_attribute(&anchor, "href") else {
            continue;
        };
        if let Some(platform) = SOCIAL_PLATFORMS.iter().find(|p| href.contains(*p)) {
            push_unique(&mut links, url_utils::absolute_social_url(&href, platform));
        }
    }

    for element in dom::elements(&page.select(SOCIAL_HINT_SELECTOR)) {
        let Some(href) = dom::non_empty_attribute(&element, "href") else {
            continue;
        };
        if href.starts_with('#') || !href.starts_with("http") {
            continue;
        }
        push_unique(&mut links, href);
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_from_markup_beats_mailto() {
        let page = Page::parse(r#"
            <body>
              <p>Sales: sales@acme.test</p>
              <a href="mailto:info@acme.test">Mail us</a>
            </body>
        "#);
        assert_eq!(extract_email(&page), "sales@acme.test");
    }

    #[test]
    fn email_from_mailto_strips_query() {
        let page = Page::parse(r#"<body><a href="mailto:hello@acme.test?subject=Hi">Mail</a></body>"#);
        assert_eq!(extract_email(&page), "hello@acme.test");
    }

    #[test]
    fn email_missing_is_empty() {
        assert_eq!(extract_email(&Page::parse("<body><p>none</p></body>")), "");
    }

    #[test]
    fn phone_prefers_tel_link() {
        let page = Page::parse(r#"
            <body>
              <p>Order 1234567890 shipped</p>
              <a href="tel:+14155550123">Call</a>
            </body>
        "#);
        assert_eq!(extract_phone(&page), "+14155550123");
    }

    #[test]
    fn phone_from_formatted_text() {
        let page = Page::parse("<body><p>Call (415) 555-0123 today</p></body>");
        assert_eq!(extract_phone(&page), "4155550123");
    }

    #[test]
    fn phone_rejects_short_numbers() {
        let page = Page::parse("<body><p>Room 12, floor 3</p></body>");
        assert_eq!(extract_phone(&page), "");
    }

    #[test]
    fn phone_is_idempotent() {
        let page = Page::parse("<body><p>+44 20 7946 0958</p></body>");
        let first = extract_phone(&page);
        assert_eq!(first, extract_phone(&page));
        assert!(first.len() >= 8);
        assert!(first.trim_start_matches('+').chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn normalize_keeps_only_leading_plus() {
        assert_eq!(normalize_phone("+1 (415) 555-0123"), "+14155550123");
        assert_eq!(normalize_phone(" +1-415"), "+1415");
        assert_eq!(normalize_phone("415+555"), "415555");
    }

    #[test]
    fn address_skips_short_candidates() {
        let page = Page::parse(r#"
            <address>Box 1</address>
            <div class="location">500 Market Street, Springfield</div>
        "#);
        assert_eq!(extract_address(&page), "500 Market Street, Springfield");
    }

    #[test]
    fn contact_info_fills_fields_across_containers() {
        let page = Page::parse(r#"
            <body>
              <section id="contact">
                <p>Write to hello@acme.test</p>
                <p class="hours">Mon-Fri 9-5</p>
              </section>
              <footer>
                <p>Phone: 415-555-0123</p>
                <p>Backup: other@acme.test</p>
                <address>1 Infinite Loop, Cupertino</address>
              </footer>
            </body>
        "#);
        let info = extract_contact_info(&page);
        assert_eq!(info.get("email").map(String::as_str), Some("hello@acme.test"));
        assert_eq!(info.get("phone").map(String::as_str), Some("415-555-0123"));
        assert_eq!(info.get("address").map(String::as_str), Some("1 Infinite Loop, Cupertino"));
        assert_eq!(info.get("hours").map(String::as_str), Some("Mon-Fri 9-5"));
    }

    #[test]
    fn contact_info_empty_without_containers() {
        assert!(extract_contact_info(&Page::parse("<p>hello@acme.test</p>")).is_empty());
    }

    #[test]
    fn social_links_are_absolute_and_unique() {
        let page = Page::parse(r##"
            <body>
              <a href="https://facebook.com/acme">fb</a>
              <a href="https://facebook.com/acme">fb again</a>
              <a href="//instagram.com/acme">ig</a>
              <a class="social-icon" href="https://mastodon.test/@acme">m</a>
              <a class="social-icon" href="#top">top</a>
              <a href="/about">about</a>
            </body>
        "##);
        assert_eq!(
            extract_social_media(&page),
            vec![
                "https://facebook.com/acme",
                "https://instagram.com/acme",
                "https://mastodon.test/@acme",
            ]
        );
    }

    #[test]
    fn social_hint_does_not_duplicate_platform_link() {
        let page = Page::parse(r#"<a class="twitter" href="https://twitter.com/acme">t</a>"#);
        assert_eq!(extract_social_media(&page), vec!["https://twitter.com/acme"]);
    }
}
