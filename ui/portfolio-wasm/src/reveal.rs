//! Reveal-on-scroll via `IntersectionObserver`.

use crate::dom::{self, Elements};
use crate::state;
use pf_core::RevealState;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const ACTIVE: &str = "active";

pub fn observe(els: &Elements) {
    if els.reveal_targets.is_empty() {
        debug!("no .reveal elements");
        return;
    }

    let callback = Closure::wrap(Box::new(|entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let target = entry.target();
            let mut state = if target.class_list().contains(ACTIVE) {
                RevealState::Revealed
            } else {
                RevealState::Hidden
            };
            if state.observe(entry.is_intersecting()) {
                dom::add_class(&target, ACTIVE);
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(state::config().reveal_threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for el in &els.reveal_targets {
                observer.observe(el);
            }
            debug!("observing {} reveal elements", els.reveal_targets.len());
        }
        Err(err) => {
            // No observer support: show everything rather than hide content forever.
            warn!("IntersectionObserver unavailable, revealing all: {err:?}");
            for el in &els.reveal_targets {
                dom::add_class(el, ACTIVE);
            }
        }
    }
    callback.forget();
}
