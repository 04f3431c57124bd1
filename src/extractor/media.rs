//! Media inventory and navigation menu.

use dom_query::Selection;

use crate::dom::{self, Page};
use crate::patterns::{MAX_MEDIA_IMAGES, MAX_MEDIA_VIDEOS, MAX_MENU_ITEMS, NAVIGATION_SELECTORS};
use crate::result::{Media, MediaImage, MediaVideo, MenuItem, Navigation};
use crate::selector;

const VIDEO_SELECTOR: &str = r#"video, iframe[src*="youtube"], iframe[src*="vimeo"]"#;

/// Images and video embeds with a `src`, plus media presence flags.
#[must_use]
pub fn extract_media(page: &Page) -> Media {
    let images = dom::elements(&page.select("img"))
        .iter()
        .filter_map(|img| {
            let src = dom::non_empty_attribute(img, "src")?;
            let alt = dom::get_attribute(img, "alt").unwrap_or_default();
            Some(MediaImage { src, alt })
        })
        .take(MAX_MEDIA_IMAGES)
        .collect();

    let videos = dom::elements(&page.select(VIDEO_SELECTOR))
        .iter()
        .filter_map(|el| dom::non_empty_attribute(el, "src"))
        .map(|src| MediaVideo { src })
        .take(MAX_MEDIA_VIDEOS)
        .collect();

    Media {
        images,
        videos,
        has_audio: page.exists("audio"),
        has_video: page.exists("video"),
        has_embedded_content: page.exists("iframe"),
        has_youtube: page.exists(r#"iframe[src*="youtube"]"#),
        has_vimeo: page.exists(r#"iframe[src*="vimeo"]"#),
    }
}

/// Menu links from the first navigation container that has any, plus menu style flags.
#[must_use]
pub fn extract_navigation(page: &Page) -> Navigation {
    let mut menu_items = selector::first_nonempty(page, NAVIGATION_SELECTORS, |containers| {
        containers.iter().flat_map(menu_links).collect()
    });
    menu_items.truncate(MAX_MENU_ITEMS);

    Navigation {
        menu_items,
        has_dropdown_menu: page.exists("ul ul, .dropdown, .sub-menu"),
        has_mobile_menu: page.exists(
            r#".mobile-menu, .hamburger, [class*="mobile-nav"], [class*="menu-toggle"]"#,
        ),
        has_breadcrumbs: page.exists(
            r#".breadcrumbs, .breadcrumb, [class*="breadcrumbs"], [class*="breadcrumb"]"#,
        ),
    }
}

fn menu_links(container: &Selection) -> Vec<MenuItem> {
    dom::elements(&dom::query_selector_all(container, "a"))
        .iter()
        .filter_map(|anchor| {
            let text = dom::trimmed_text(anchor);
            let href = dom::non_empty_attribute(anchor, "href")?;
            (!text.is_empty()).then_some(MenuItem { text, href })
        })
        .collect()
}
