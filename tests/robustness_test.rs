use rs_siteprofile::{extract_profile_from_html, ExtractionRecord, ResponseHeaders};

fn profile(html: &str) -> ExtractionRecord {
    extract_profile_from_html(html, &ResponseHeaders::new())
}

/// Fields that must hold their empty default when the markup carries no signal.
fn assert_no_findings(record: &ExtractionRecord) {
    assert_eq!(record.business_type, "Unknown");
    assert!(record.email.is_empty());
    assert!(record.phone.is_empty());
    assert!(record.address.is_empty());
    assert!(record.social_media.is_empty());
    assert!(record.technologies.is_empty());
    assert!(record.forms.is_empty());
    assert!(record.products.is_empty());
    assert!(record.services.is_empty());
    assert!(record.faqs.is_empty());
    assert!(record.contact_info.is_empty());
    assert!(record.languages.is_empty());
    assert!(record.other_info.is_empty());
    assert!(!record.privacy_policy);
    assert!(!record.terms_of_service);
    assert!(!record.security.has_https);
    assert!(!record.security.login_form);
    assert_eq!(record.page_structure.total_links, 0);
    assert_eq!(record.performance.total_scripts, 0);
    assert!(record.media.images.is_empty());
    assert!(record.navigation.menu_items.is_empty());
}

#[test]
fn empty_string_yields_defaults() {
    let record = profile("");
    assert_no_findings(&record);
    assert!(record.website_title.is_empty());
    assert!(record.description.is_empty());
    assert!(record.raw_content_excerpt.is_empty());
}

#[test]
fn unclosed_tags_do_not_panic() {
    let record = profile("<p>text<div>more");
    assert_no_findings(&record);
    assert_eq!(record.description, "text");
    assert!(record.raw_content_excerpt.contains("more"));
}

#[test]
fn invalid_nesting_does_not_panic() {
    assert_no_findings(&profile("<p><div></p></div>"));
}

#[test]
fn broken_attributes_do_not_panic() {
    assert_no_findings(&profile("<div class=\"test id=broken>"));
}

#[test]
fn incomplete_entities_do_not_panic() {
    let record = profile("&amp text &lt;");
    assert_no_findings(&record);
    assert!(record.raw_content_excerpt.contains("text"));
}

#[test]
fn non_html_input_is_tolerated() {
    assert_no_findings(&profile("{\"not\": \"html\"}"));
    assert_no_findings(&profile("\u{0}\u{1}\u{2} binary-ish"));
}

#[test]
fn malformed_json_ld_is_ignored() {
    let record = profile(r#"<script type="application/ld+json">{"@type": "FAQPage", "mainEntity": [</script>"#);
    assert!(record.faqs.is_empty());
}

#[test]
fn headings_without_text_do_not_become_products() {
    let record = profile(r#"<div class="product"><h3>   </h3><span class="price">$5</span></div>"#);
    assert!(record.products.is_empty());
}

#[test]
fn extraction_is_deterministic() {
    let html = r#"
        <title>Acme</title>
        <p>Call +44 20 7946 0958 or mail hello@acme.test</p>
        <a href="https://facebook.com/acme">f</a>
    "#;
    assert_eq!(profile(html), profile(html));
}

#[test]
fn phone_output_is_digits_with_optional_plus() {
    for html in [
        "<p>+1 (415) 555-0123</p>",
        "<p>415.555.0123</p>",
        r#"<a href="tel:+442079460958">x</a>"#,
        "<p>Ref 5551234567</p>",
    ] {
        let phone = profile(html).phone;
        assert!(phone.len() >= 8, "{html} -> {phone}");
        let digits = phone.strip_prefix('+').unwrap_or(&phone);
        assert!(digits.chars().all(|c| c.is_ascii_digit()), "{html} -> {phone}");
    }
}
