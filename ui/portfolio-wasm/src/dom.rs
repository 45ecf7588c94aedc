//! DOM element bindings.
//!
//! Every element the page controller touches is resolved once at startup.
//! All fields are optional: a page without a given element simply loses the
//! behaviour that depends on it.

use pf_core::Field;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollToOptions,
};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

/// `querySelector`, treating an invalid selector as no match.
pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(nl) = document().query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nl.length())
        .filter_map(|i| nl.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

/// Set an inline style property; an empty value removes it.
pub fn set_style(el: &Element, property: &str, value: &str) {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    if value.is_empty() {
        let _ = style.remove_property(property);
    } else {
        let _ = style.set_property(property, value);
    }
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// Animated scroll to a document-relative vertical position.
pub fn smooth_scroll_to(top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Either kind of text control used by the contact form.
#[derive(Clone)]
pub enum TextControl {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl TextControl {
    fn bind(id: &str) -> Option<Self> {
        let el = by_id(id)?;
        match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(TextControl::Input(input)),
            Err(el) => el.dyn_into::<HtmlTextAreaElement>().ok().map(TextControl::TextArea),
        }
    }

    pub fn value(&self) -> String {
        match self {
            TextControl::Input(el) => el.value(),
            TextControl::TextArea(el) => el.value(),
        }
    }

    pub fn set_value(&self, value: &str) {
        match self {
            TextControl::Input(el) => el.set_value(value),
            TextControl::TextArea(el) => el.set_value(value),
        }
    }

    pub fn element(&self) -> &Element {
        match self {
            TextControl::Input(el) => el.unchecked_ref(),
            TextControl::TextArea(el) => el.unchecked_ref(),
        }
    }
}

/// A contact form control together with its inline error container.
#[derive(Clone)]
pub struct FormField {
    pub field: Field,
    pub control: TextControl,
    pub error: Option<Element>,
}

#[derive(Clone)]
pub struct ContactElements {
    pub form: Element,
    pub fields: Vec<FormField>,
    pub success: Option<Element>,
}

impl ContactElements {
    fn bind() -> Option<Self> {
        let form = by_id("contactForm")?;
        let fields = Field::ALL
            .into_iter()
            .filter_map(|field| {
                Some(FormField {
                    field,
                    control: TextControl::bind(field.input_id())?,
                    error: by_id(field.error_id()),
                })
            })
            .collect();
        Some(Self {
            form,
            fields,
            success: by_id("successMessage"),
        })
    }

    pub fn field(&self, field: Field) -> Option<&FormField> {
        self.fields.iter().find(|f| f.field == field)
    }
}

// ── Elements struct ──

/// All DOM element references used by the page controller.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub root: Option<Element>,
    pub navbar: Option<Element>,
    pub reveal_targets: Vec<Element>,
    pub anchors: Vec<Element>,

    pub theme_toggle: Option<Element>,
    pub theme_icon: Option<Element>,

    pub contact: Option<ContactElements>,

    pub scroll_top_btn: Option<Element>,
    pub project_cards: Vec<Element>,
    pub skill_cards: Vec<Element>,
    pub visitor_message: Option<Element>,
}

impl Elements {
    /// Resolve all DOM references. Call once the document is parsed.
    pub fn bind() -> Elements {
        let theme_toggle = by_id("themeToggle");
        let theme_icon = theme_toggle
            .as_ref()
            .and_then(|btn| btn.query_selector("i").ok().flatten())
            .or_else(|| theme_toggle.clone());

        Elements {
            root: document().document_element(),
            navbar: query(".navbar"),
            reveal_targets: query_all(".reveal"),
            anchors: query_all("a[href^=\"#\"]"),

            theme_toggle,
            theme_icon,

            contact: ContactElements::bind(),

            scroll_top_btn: by_id("scrollTopBtn"),
            project_cards: query_all(pf_core::CardKind::Project.selector()),
            skill_cards: query_all(pf_core::CardKind::Skill.selector()),
            visitor_message: by_id("visitorMessage"),
        }
    }
}
