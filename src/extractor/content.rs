//! Business content: forms, products and services.

use dom_query::Selection;

use crate::dom::{self, Page};
use crate::patterns::{
    MAX_PRODUCTS, PRODUCT_NAME_SELECTOR, PRODUCT_PRICE_SELECTOR, PRODUCT_SELECTORS,
    SERVICE_LIST_SELECTORS, SERVICE_TITLE_SELECTORS,
};
use crate::result::{FormInfo, Product};
use crate::selector::{self, push_unique};

/// Newsletter forms are short; anything with this many fields or more is not one.
const NEWSLETTER_MAX_FIELDS: usize = 4;

/// A classification rule over a form and its field count.
type FormRule = fn(&Selection, usize) -> bool;

/// Form classification, checked in order; the first matching rule names the form.
const FORM_RULES: &[(&str, FormRule)] = &[
    ("Search Form", is_search),
    ("Newsletter Signup", is_newsletter),
    ("Contact Form", is_contact),
    ("Login Form", is_login),
    ("Search Form", is_named_search),
    ("Subscription Form", is_subscription),
    ("Comment Form", is_comment),
];

fn is_search(form: &Selection, _fields: usize) -> bool {
    has(form, r#"input[type="search"]"#)
}

fn is_newsletter(form: &Selection, fields: usize) -> bool {
    fields < NEWSLETTER_MAX_FIELDS && has(form, r#"input[name*="email"], input[type="email"]"#)
}

fn is_contact(form: &Selection, _fields: usize) -> bool {
    has(form, r#"input[name*="contact"], textarea"#) || id_or_class_contains(form, "contact")
}

fn is_login(form: &Selection, _fields: usize) -> bool {
    has(form, r#"input[type="password"]"#)
}

fn is_named_search(form: &Selection, _fields: usize) -> bool {
    has(form, r#"input[name*="search"]"#)
}

fn is_subscription(form: &Selection, _fields: usize) -> bool {
    has(form, r#"input[name*="subscribe"]"#)
}

fn is_comment(form: &Selection, _fields: usize) -> bool {
    has(form, r#"input[name*="comment"]"#) || id_or_class_contains(form, "comment")
}

const UNKNOWN_FORM: &str = "Unknown";

fn has(form: &Selection, selector: &str) -> bool {
    form.select(selector).exists()
}

fn id_or_class_contains(form: &Selection, needle: &str) -> bool {
    ["id", "class"].iter().any(|name| {
        dom::get_attribute(form, name).is_some_and(|value| value.contains(needle))
    })
}

/// Every `<form>` with its field count and purpose.
#[must_use]
pub fn extract_forms(page: &Page) -> Vec<FormInfo> {
    dom::elements(&page.select("form"))
        .iter()
        .map(|form| {
            let fields = form.select("input, select, textarea").length();
            let form_type = FORM_RULES
                .iter()
                .find(|(_, rule)| rule(form, fields))
                .map_or(UNKNOWN_FORM, |(label, _)| *label);
            FormInfo {
                form_type: form_type.to_string(),
                fields,
            }
        })
        .collect()
}

/// Products from the first product container selector that yields any.
///
/// A container needs a non-empty name to count; the price is optional.
#[must_use]
pub fn extract_products(page: &Page) -> Vec<Product> {
    let mut products = selector::first_nonempty(page, PRODUCT_SELECTORS, |containers| {
        containers.iter().filter_map(product_from).collect()
    });
    products.truncate(MAX_PRODUCTS);
    products
}

fn product_from(container: &Selection) -> Option<Product> {
    let name = dom::trimmed_text(&dom::query_first(container, PRODUCT_NAME_SELECTOR));
    if name.is_empty() {
        return None;
    }
    let price = dom::trimmed_text(&dom::query_first(container, PRODUCT_PRICE_SELECTOR));
    Some(Product {
        name,
        price: (!price.is_empty()).then_some(price),
    })
}

/// Service names from heading selectors, falling back to list items.
#[must_use]
pub fn extract_services(page: &Page) -> Vec<String> {
    let services = selector::first_nonempty(page, SERVICE_TITLE_SELECTORS, unique_texts);
    if !services.is_empty() {
        return services;
    }
    selector::first_nonempty(page, SERVICE_LIST_SELECTORS, unique_texts)
}

fn unique_texts(elements: Vec<Selection>) -> Vec<String> {
    let mut texts = Vec::new();
    for el in &elements {
        let text = dom::trimmed_text(el);
        if !text.is_empty() {
            push_unique(&mut texts, text);
        }
    }
    texts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_types(html: &str) -> Vec<String> {
        extract_forms(&Page::parse(html))
            .into_iter()
            .map(|f| f.form_type)
            .collect()
    }

    #[test]
    fn forms_are_classified_in_rule_order() {
        let html = r#"
            <form><input type="search" name="q"></form>
            <form><input type="email" name="email"><button>Go</button></form>
            <form id="contact-form"><input name="name"><input name="email"><input name="phone"><textarea></textarea></form>
            <form><input name="user"><input type="password" name="pass"></form>
            <form><input name="site_search"></form>
            <form><input name="subscribe_me"></form>
            <form class="comment-box"><input name="author"></form>
            <form><input name="x"></form>
        "#;
        assert_eq!(
            form_types(html),
            vec![
                "Search Form",
                "Newsletter Signup",
                "Contact Form",
                "Login Form",
                "Search Form",
                "Subscription Form",
                "Comment Form",
                "Unknown",
            ]
        );
    }

    #[test]
    fn long_email_form_is_not_a_newsletter() {
        let html = r#"<form>
            <input name="first"><input name="last"><input name="email"><select name="topic"></select>
        </form>"#;
        assert_eq!(form_types(html), vec!["Unknown"]);
    }

    #[test]
    fn form_field_count_includes_selects_and_textareas() {
        let forms = extract_forms(&Page::parse(
            "<form><input><select></select><textarea></textarea><button>x</button></form>",
        ));
        assert_eq!(forms[0].fields, 3);
    }

    #[test]
    fn products_with_and_without_price() {
        let page = Page::parse(r#"
            <div class="product"><h3>Hammer</h3><span class="price">$12</span></div>
            <div class="product"><h3>Saw</h3></div>
            <div class="product"><span class="price">$1</span></div>
        "#);
        assert_eq!(
            extract_products(&page),
            vec![
                Product { name: "Hammer".into(), price: Some("$12".into()) },
                Product { name: "Saw".into(), price: None },
            ]
        );
    }

    #[test]
    fn products_fall_through_unproductive_selectors() {
        let page = Page::parse(r#"
            <div class="product"><span>no name</span></div>
            <li class="product-card"><h4>Wrench</h4></li>
        "#);
        let products = extract_products(&page);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Wrench");
    }

    #[test]
    fn products_are_capped() {
        let cards: String = (0..14)
            .map(|i| format!(r#"<div class="product"><h3>Item {i}</h3></div>"#))
            .collect();
        assert_eq!(extract_products(&Page::parse(&cards)).len(), MAX_PRODUCTS);
    }

    #[test]
    fn services_from_titles_are_unique() {
        let page = Page::parse(r#"
            <section class="services">
              <div class="service"><h3>Plumbing</h3></div>
              <div class="service"><h3>Heating</h3></div>
              <div class="service"><h3>Plumbing</h3></div>
            </section>
        "#);
        assert_eq!(extract_services(&page), vec!["Plumbing", "Heating"]);
    }

    #[test]
    fn services_stop_at_first_productive_selector() {
        let page = Page::parse(r#"
            <section class="services">
              <div class="service"><h3>Plumbing</h3></div>
            </section>
            <div class="service-area"><h3>Not reported</h3></div>
        "#);
        assert_eq!(extract_services(&page), vec!["Plumbing"]);
    }

    #[test]
    fn services_fall_back_to_list_items() {
        let page = Page::parse(r#"<ul class="services"><li>Audits</li><li> </li><li>Training</li></ul>"#);
        assert_eq!(extract_services(&page), vec!["Audits", "Training"]);
    }

    #[test]
    fn nothing_found_on_empty_page() {
        let page = Page::parse("");
        assert!(extract_forms(&page).is_empty());
        assert!(extract_products(&page).is_empty());
        assert!(extract_services(&page).is_empty());
    }
}
