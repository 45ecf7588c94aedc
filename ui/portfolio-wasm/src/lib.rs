//! Portfolio page controller.
//!
//! Pure Rust + WASM interactivity for the static portfolio page. Decisions
//! come from `pf-core`; the modules here only read and write the DOM.

pub mod anchors;
pub mod contact;
pub mod dom;
pub mod events;
pub mod hover;
pub mod navbar;
pub mod reveal;
pub mod scroll_top;
pub mod state;
pub mod theme;
pub mod visits;

use pf_core::PageConfig;
use tracing::info;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let document = dom::document();
    if document.ready_state() == "loading" {
        let cb = Closure::once(move || init());
        document.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())?;
        cb.forget();
    } else {
        init();
    }
    Ok(())
}

/// Main initialisation sequence, run once the document is parsed.
fn init() {
    let config = PageConfig::from_json(
        dom::document()
            .body()
            .and_then(|body| body.get_attribute("data-page-config"))
            .as_deref(),
    );
    state::set_config(config);

    let els = dom::Elements::bind();

    // Theme first so the initial navbar style matches it
    theme::restore(&els);
    scroll_top::update(&els);

    reveal::observe(&els);
    events::bind_events(&els);
    visits::record(&els);

    info!("page controller ready");
}
