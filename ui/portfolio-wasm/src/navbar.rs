//! Navbar restyling on scroll.

use crate::dom::{self, Elements};
use crate::state;
use pf_core::navbar_style;

/// Write the navbar style for the current scroll offset and theme.
pub fn apply(els: &Elements) {
    let Some(navbar) = &els.navbar else {
        return;
    };
    let style = navbar_style(dom::scroll_y(), state::theme(), &state::config());
    for (property, value) in style.properties() {
        dom::set_style(navbar, property, value);
    }
}
