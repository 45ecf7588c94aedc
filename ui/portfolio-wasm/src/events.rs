//! Event binding.
//!
//! Wires every page listener once at startup. Handlers live in the behaviour
//! modules; this module only decides which element gets which event.

use crate::dom::Elements;
use crate::{anchors, contact, hover, navbar, scroll_top, theme};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::EventTarget;

/// Attach a listener for the lifetime of the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        warn!("failed to bind {event} listener: {err:?}");
    }
    cb.forget();
}

/// Bind all page event listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    // ── Scroll ──
    {
        let els2 = els.clone();
        listen(&crate::dom::window(), "scroll", move |_| {
            navbar::apply(&els2);
            scroll_top::update(&els2);
        });
    }

    // ── Anchors ──
    anchors::bind(els);

    // ── Theme toggle ──
    match &els.theme_toggle {
        Some(toggle) => {
            let els2 = els.clone();
            listen(toggle, "click", move |_| theme::on_toggle(&els2));
        }
        None => debug!("no #themeToggle, theme toggle disabled"),
    }

    // ── Contact form ──
    match &els.contact {
        Some(form) => contact::bind(form),
        None => debug!("no #contactForm, validation disabled"),
    }

    // ── Scroll to top ──
    if let Some(btn) = &els.scroll_top_btn {
        listen(btn, "click", |_| scroll_top::on_click());
    }

    // ── Cards ──
    hover::bind(els);
}
