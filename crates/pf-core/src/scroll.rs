//! Scroll position math for anchor links and the scroll-to-top button.

use crate::config::PageConfig;

/// Document-relative scroll position for an in-page anchor target.
///
/// `element_top` and `body_top` are viewport-relative bounding-rect tops;
/// their difference is the element's position in the document. The header
/// offset keeps the target clear of the fixed navbar.
pub fn anchor_scroll_target(element_top: f64, body_top: f64, header_offset: f64) -> f64 {
    (element_top - body_top) - header_offset
}

pub fn scroll_top_visible(scroll_offset: f64, config: &PageConfig) -> bool {
    scroll_offset > config.scroll_top_after
}

/// Extract the selector from an in-page link. Bare `#` has no target.
pub fn anchor_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_top_boundaries() {
        let config = PageConfig::default();
        assert!(!scroll_top_visible(0.0, &config));
        assert!(scroll_top_visible(301.0, &config));
        assert!(!scroll_top_visible(300.0, &config));
    }

    #[test]
    fn anchor_target_subtracts_header() {
        // Page scrolled 500px: body top is -500, section top is 200 in the viewport.
        assert_eq!(anchor_scroll_target(200.0, -500.0, 80.0), 620.0);
        // Unscrolled page with the section directly below the header.
        assert_eq!(anchor_scroll_target(80.0, 0.0, 80.0), 0.0);
    }

    #[test]
    fn bare_hash_has_no_selector() {
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector("/about"), None);
        assert_eq!(anchor_selector("#projects"), Some("#projects"));
    }
}
