use rs_siteprofile::{extract_profile, extract_profile_from_html, Page, Product, ResponseHeaders};

fn profile(html: &str) -> rs_siteprofile::ExtractionRecord {
    extract_profile_from_html(html, &ResponseHeaders::new())
}

#[test]
fn email_from_mailto_only() {
    let record = profile(r#"<html><body><a href="mailto:info@acme.test">Write to us</a></body></html>"#);
    assert_eq!(record.email, "info@acme.test");
}

#[test]
fn tel_link_beats_other_digit_runs() {
    let record = profile(r#"
        <html><body>
          <p>Order 1234567890 and invoice 9876543210 are ready.</p>
          <a href="tel:+14155550123">Call</a>
        </body></html>
    "#);
    assert_eq!(record.phone, "+14155550123");
}

#[test]
fn index_page_phone_fills_primary_gap() {
    let primary = Page::parse("<html><body><p>Welcome to Acme.</p></body></html>");
    let index = Page::parse(r#"<html><body><a href="tel:5551234567">Call</a></body></html>"#);
    let record = extract_profile(&primary, &index, &ResponseHeaders::new());
    assert_eq!(record.phone, "5551234567");
}

#[test]
fn ecommerce_classification_from_body_keywords() {
    let record = profile("<html><body><p>shop buy cart shop buy cart</p></body></html>");
    assert_eq!(record.business_type, "E-commerce");
}

#[test]
fn alt_coverage_counts() {
    let with_alt: String = (0..9).map(|i| format!(r#"<img src="/{i}.png" alt="Image {i}">"#)).collect();
    let without_alt: String = (9..12).map(|i| format!(r#"<img src="/{i}.png">"#)).collect();
    let record = profile(&format!("<html><body>{with_alt}{without_alt}</body></html>"));

    assert_eq!(record.seo_info.img_alt_tags, 9);
    assert_eq!(record.seo_info.img_missing_alt, 3);
    assert_eq!(record.accessibility.has_alt_text, 9);
    assert_eq!(record.accessibility.missing_alt_text, 3);
    assert_eq!(record.page_structure.total_images, 12);
    assert_eq!(record.media.images.len(), 10);
}

#[test]
fn full_homepage_profile() {
    let html = r#"
    <!DOCTYPE html>
    <html lang="en">
    <head>
      <title>Bella Cucina</title>
      <meta name="description" content="Italian restaurant with a seasonal menu. Book a reservation.">
      <meta property="og:title" content="Bella Cucina">
      <meta name="twitter:card" content="summary">
      <meta name="viewport" content="width=device-width, initial-scale=1">
      <link rel="canonical" href="https://bella.test">
      <script src="https://code.jquery.com/jquery.min.js"></script>
    </head>
    <body>
      <header><nav><a href="/">Home</a><a href="/menu">Menu</a><a href="https://order.example/bella">Order</a></nav></header>
      <h1>Fresh food, every day</h1>
      <section class="services">
        <h3>Catering</h3>
        <h3>Private dining</h3>
      </section>
      <form id="contact-form"><input name="name"><textarea name="message"></textarea></form>
      <footer class="contact">
        <p>Reservations: reserve@bella.test</p>
        <p>Phone: (312) 555-0199</p>
        <address>12 Wacker Drive, Chicago</address>
        <p class="hours">Tue-Sun 5pm-11pm</p>
        <a href="https://www.instagram.com/bellacucina">Instagram</a>
        <a href="/privacy">Privacy</a>
      </footer>
    </body>
    </html>
    "#;
    let mut headers = ResponseHeaders::new();
    headers.insert("server".into(), "nginx".into());
    let record = extract_profile_from_html(html, &headers);

    assert_eq!(record.website_title, "Bella Cucina");
    assert_eq!(record.business_type, "Restaurant");
    assert_eq!(record.description, "Italian restaurant with a seasonal menu. Book a reservation.");
    assert_eq!(record.email, "reserve@bella.test");
    assert_eq!(record.phone, "3125550199");
    assert_eq!(record.address, "12 Wacker Drive, Chicago");
    assert_eq!(record.social_media, vec!["https://www.instagram.com/bellacucina"]);
    assert_eq!(record.technologies, vec!["jQuery", "Server: nginx"]);
    assert_eq!(record.services, vec!["Catering", "Private dining"]);
    assert_eq!(record.forms.len(), 1);
    assert_eq!(record.forms[0].form_type, "Contact Form");
    assert_eq!(record.contact_info.get("hours").map(String::as_str), Some("Tue-Sun 5pm-11pm"));
    assert!(record.privacy_policy);
    assert!(!record.terms_of_service);
    assert_eq!(record.languages, vec!["en"]);
    assert_eq!(record.seo_info.og_tags.get("title").map(String::as_str), Some("Bella Cucina"));
    assert_eq!(record.navigation.menu_items.len(), 3);
    assert_eq!(record.page_structure.internal_links, 3);
    assert_eq!(record.page_structure.external_links, 2);
    assert_eq!(record.performance.response_headers.get("server").map(String::as_str), Some("nginx"));
    assert!(record.mobile_optimization.has_viewport_meta);
    assert!(record.other_info.is_empty());
}

#[test]
fn products_stop_at_first_productive_selector() {
    let record = profile(r#"
        <html><body>
          <div class="product"><h3>Anvil</h3><span class="price">$99</span></div>
          <div class="product-card"><h3>Not reported</h3></div>
        </body></html>
    "#);
    assert_eq!(
        record.products,
        vec![Product { name: "Anvil".into(), price: Some("$99".into()) }]
    );
}

#[test]
fn social_links_never_duplicate() {
    let primary = Page::parse(r#"<a href="https://twitter.com/acme">t</a><a href="//twitter.com/acme">t</a>"#);
    let index = Page::parse(r#"<a href="https://twitter.com/acme">t</a>"#);
    let record = extract_profile(&primary, &index, &ResponseHeaders::new());

    assert_eq!(record.social_media, vec!["https://twitter.com/acme"]);
    for link in &record.social_media {
        assert!(link.starts_with("http"));
    }
}

#[test]
fn serialized_record_has_fixed_field_set() {
    let json = serde_json::to_value(profile("")).expect("record serializes");
    let object = json.as_object().expect("record is an object");
    assert_eq!(object.len(), 26);
    for key in ["websiteTitle", "seoInfo", "mobileOptimization", "rawContentExcerpt", "otherInfo"] {
        assert!(object.contains_key(key), "missing {key}");
    }
}
