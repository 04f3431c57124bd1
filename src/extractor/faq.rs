//! FAQ extraction.
//!
//! Structured data wins: when any JSON-LD `FAQPage` yields a question, the
//! markup is not consulted. Otherwise accordion items are collected, followed
//! by definition-list pairs.

use serde_json::Value;

use crate::dom::{self, Page};
use crate::patterns::{FAQ_ANSWER_SELECTOR, FAQ_ITEM_SELECTOR, FAQ_QUESTION_SELECTOR, JSON_LD_SELECTOR};
use crate::result::Faq;

/// Question/answer pairs from JSON-LD, accordion markup and definition lists.
#[must_use]
pub fn extract_faqs(page: &Page) -> Vec<Faq> {
    let mut faqs = json_ld_faqs(page);

    if faqs.is_empty() {
        faqs.extend(accordion_faqs(page));
        faqs.extend(definition_list_faqs(page));
    }

    faqs
}

/// FAQs from every parseable JSON-LD block. Malformed blocks are skipped.
fn json_ld_faqs(page: &Page) -> Vec<Faq> {
    let mut faqs = Vec::new();

    for script in dom::elements(&page.select(JSON_LD_SELECTOR)) {
        let json_text = dom::text_content(&script).trim().to_string();
        if json_text.is_empty() {
            continue;
        }
        let Ok(data) = serde_json::from_str::<Value>(&json_text) else {
            continue;
        };
        collect_faq_pages(&data, &mut faqs);
    }

    faqs
}

/// Walk top-level arrays and `@graph` containers looking for `FAQPage` nodes.
fn collect_faq_pages(value: &Value, faqs: &mut Vec<Faq>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_faq_pages(item, faqs);
            }
        }
        Value::Object(map) => {
            if has_type(value, "FAQPage") {
                match map.get("mainEntity") {
                    Some(Value::Array(entities)) => {
                        faqs.extend(entities.iter().filter_map(question_from));
                    }
                    Some(entity @ Value::Object(_)) => faqs.extend(question_from(entity)),
                    _ => {}
                }
            }
            if let Some(graph) = map.get("@graph") {
                collect_faq_pages(graph, faqs);
            }
        }
        _ => {}
    }
}

fn question_from(entity: &Value) -> Option<Faq> {
    if !has_type(entity, "Question") {
        return None;
    }
    let question = entity.get("name")?.as_str()?.trim();
    let answer = entity.get("acceptedAnswer")?.get("text")?.as_str()?.trim();
    Some(Faq {
        question: question.to_string(),
        answer: answer.to_string(),
    })
}

/// Whether `@type` is `expected`, either as a string or inside an array.
fn has_type(value: &Value, expected: &str) -> bool {
    match value.get("@type") {
        Some(Value::String(t)) => t == expected,
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some(expected)),
        _ => false,
    }
}

fn accordion_faqs(page: &Page) -> Vec<Faq> {
    dom::elements(&page.select(FAQ_ITEM_SELECTOR))
        .iter()
        .filter_map(|item| {
            let question = dom::trimmed_text(&dom::query_first(item, FAQ_QUESTION_SELECTOR));
            let answer = dom::trimmed_text(&dom::query_first(item, FAQ_ANSWER_SELECTOR));
            (!question.is_empty() && !answer.is_empty()).then_some(Faq { question, answer })
        })
        .collect()
}

/// `dt`/`dd` pairs matched by position within each `dl`.
fn definition_list_faqs(page: &Page) -> Vec<Faq> {
    let mut faqs = Vec::new();

    for list in dom::elements(&page.select("dl")) {
        let terms = dom::elements(&dom::query_selector_all(&list, "dt"));
        let definitions = dom::elements(&dom::query_selector_all(&list, "dd"));

        for (term, definition) in terms.iter().zip(&definitions) {
            let question = dom::trimmed_text(term);
            let answer = dom::trimmed_text(definition);
            if !question.is_empty() && !answer.is_empty() {
                faqs.push(Faq { question, answer });
            }
        }
    }

    faqs
}
