//! Field extractors.
//!
//! Each extractor reads one [`Page`](crate::dom::Page) and returns a plain
//! value; none of them fails or mutates the document. Absent information
//! becomes an empty string, empty list, `false` or zero.
//!
//! # Module Structure
//!
//! - `contact`: email, phone, address, contact block and social links
//! - `seo`: head metadata, description, excerpt, policy links, languages
//! - `technology`: library, analytics and CMS fingerprints
//! - `structure`: layout, performance, security, accessibility and mobile probes
//! - `media`: image and video inventory, navigation menu
//! - `content`: forms, products and services
//! - `faq`: question/answer pairs

pub mod contact;
pub mod content;
pub mod faq;
pub mod media;
pub mod seo;
pub mod structure;
pub mod technology;

pub use contact::{
    extract_address, extract_contact_info, extract_email, extract_phone, extract_social_media,
};
pub use content::{extract_forms, extract_products, extract_services};
pub use faq::extract_faqs;
pub use media::{extract_media, extract_navigation};
pub use seo::{
    detect_languages, extract_content_excerpt, extract_description, extract_seo_info,
    has_privacy_policy, has_terms_of_service,
};
pub use structure::{
    analyze_page_structure, analyze_performance, analyze_security, check_accessibility,
    check_mobile_optimization,
};
pub use technology::detect_technologies;
