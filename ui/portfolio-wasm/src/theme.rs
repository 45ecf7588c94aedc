//! Light/dark theme handling.
//!
//! The theme lives in `data-theme` on `<html>`; the stylesheet keys off that
//! attribute. Inline navbar styles are recomputed on every change so they
//! match the new theme without waiting for the next scroll event.

use crate::dom::{self, Elements};
use crate::navbar;
use crate::state;
use pf_core::Theme;
use tracing::{info, warn};

/// Read the persisted theme and apply it. Called once at startup.
pub fn restore(els: &Elements) {
    let theme = Theme::load(&state::store()).unwrap_or_else(|err| {
        warn!("could not read saved theme: {err}");
        Theme::default()
    });
    state::set_theme(theme);
    apply_theme(els, theme);
}

pub fn apply_theme(els: &Elements, theme: Theme) {
    if let Some(root) = &els.root {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Some(icon) = &els.theme_icon {
        dom::set_text(icon, theme.glyph());
    }
    navbar::apply(els);
}

pub fn on_toggle(els: &Elements) {
    let current = state::theme();
    let next = current.toggle_persisted(&state::store()).unwrap_or_else(|err| {
        warn!("could not persist theme: {err}");
        current.toggled()
    });
    state::set_theme(next);
    apply_theme(els, next);
    info!("theme switched to {next}");
}
