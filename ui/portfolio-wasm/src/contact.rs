//! Contact form validation and submission.
//!
//! Fields are validated on blur for immediate feedback and all together on
//! submit. Only a fully valid form is appended to the submission log.

use crate::dom::{self, ContactElements, FormField};
use crate::events::listen;
use crate::state;
use chrono::Utc;
use gloo_timers::callback::Timeout;
use pf_core::{ContactForm, Field, FieldError, SubmitOutcome, submit};
use tracing::{debug, info, warn};

const ERROR_CLASS: &str = "error";
const ERROR_BORDER: &str = "#ef4444";
const BANNER_CLASS: &str = "show";

pub fn bind(contact: &ContactElements) {
    for field in &contact.fields {
        let field2 = field.clone();
        listen(field.control.element(), "blur", move |_| {
            let result = field2.field.validate(&field2.control.value());
            show_result(&field2, result);
        });
    }

    let contact2 = contact.clone();
    listen(&contact.form, "submit", move |e| {
        e.prevent_default();
        on_submit(&contact2);
    });
}

fn show_result(field: &FormField, result: Result<(), FieldError>) {
    let input = field.control.element();
    match result {
        Ok(()) => {
            if let Some(error) = &field.error {
                dom::set_text(error, "");
            }
            dom::remove_class(input, ERROR_CLASS);
            dom::set_style(input, "border-color", "");
        }
        Err(err) => {
            if let Some(error) = &field.error {
                dom::set_text(error, &err.to_string());
            }
            dom::add_class(input, ERROR_CLASS);
            dom::set_style(input, "border-color", ERROR_BORDER);
        }
    }
}

fn read_form(contact: &ContactElements) -> ContactForm {
    let value = |field: Field| {
        contact
            .field(field)
            .map(|f| f.control.value())
            .unwrap_or_default()
    };
    ContactForm {
        name: value(Field::Name),
        email: value(Field::Email),
        message: value(Field::Message),
    }
}

pub fn on_submit(contact: &ContactElements) {
    let mut form = read_form(contact);
    match submit(&state::store(), &mut form, Utc::now()) {
        Ok(SubmitOutcome::Rejected(report)) => {
            for (field, result) in report.results {
                if let Some(f) = contact.field(field) {
                    show_result(f, result);
                }
            }
            debug!("contact form rejected with {} invalid field(s)", report.errors().count());
        }
        Ok(SubmitOutcome::Accepted { total }) => {
            info!("contact submission stored ({total} total)");
            for field in &contact.fields {
                show_result(field, Ok(()));
                field.control.set_value(form.value(field.field));
            }
            show_banner(contact);
        }
        Err(err) => warn!("could not store contact submission: {err}"),
    }
}

/// Show the success banner; a newer submission restarts the hide timer.
fn show_banner(contact: &ContactElements) {
    let Some(banner) = &contact.success else {
        return;
    };
    dom::add_class(banner, BANNER_CLASS);
    let banner2 = banner.clone();
    let timer = Timeout::new(state::config().banner_duration_ms, move || {
        dom::remove_class(&banner2, BANNER_CLASS);
    });
    state::replace_banner_timer(Some(timer));
}
