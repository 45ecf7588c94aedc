//! Visit counter and welcome message.

use crate::dom::{self, Elements};
use crate::state;
use chrono::Utc;
use tracing::{info, warn};

pub fn record(els: &Elements) {
    match pf_core::record_visit(&state::store(), Utc::now()) {
        Ok(outcome) => {
            let message = outcome.message();
            info!(count = outcome.count(), "{message}");
            if let Some(el) = &els.visitor_message {
                dom::set_text(el, &message);
            }
        }
        Err(err) => warn!("visit bookkeeping skipped: {err}"),
    }
}
