//! Scroll-to-top button.

use crate::dom::{self, Elements};
use crate::state;
use pf_core::scroll_top_visible;

pub fn update(els: &Elements) {
    if let Some(btn) = &els.scroll_top_btn {
        let visible = scroll_top_visible(dom::scroll_y(), &state::config());
        dom::toggle_class(btn, "visible", visible);
    }
}

pub fn on_click() {
    dom::smooth_scroll_to(0.0);
}
