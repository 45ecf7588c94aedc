//! Smooth scrolling for in-page anchor links.

use crate::dom::{self, Elements};
use crate::events::listen;
use crate::state;
use pf_core::anchor_scroll_target;
use pf_core::scroll::anchor_selector;
use tracing::debug;

pub fn bind(els: &Elements) {
    for anchor in &els.anchors {
        let link = anchor.clone();
        listen(anchor, "click", move |e| {
            e.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            scroll_to_anchor(&href);
        });
    }
}

/// Scroll so the anchor target sits just below the fixed header.
fn scroll_to_anchor(href: &str) {
    let Some(selector) = anchor_selector(href) else {
        return;
    };
    let Some(target) = dom::query(selector) else {
        debug!("anchor target {selector} not found");
        return;
    };
    let Some(body) = dom::document().body() else {
        return;
    };
    let top = anchor_scroll_target(
        target.get_bounding_client_rect().top(),
        body.get_bounding_client_rect().top(),
        state::config().anchor_offset,
    );
    dom::smooth_scroll_to(top);
}
