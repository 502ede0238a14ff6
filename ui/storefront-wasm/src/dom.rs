//! DOM helpers and bind-once element references.
//!
//! Most interactive elements are reached through event delegation, so
//! [`Elements`] only holds what must be resolved up front. A page without a
//! cart panel or option groups is valid markup; absent elements bind to
//! `None`/empty rather than failing startup.

use gloo_utils::{body, document, window};
use wasm_bindgen::JsCast;
use web_sys::Element;

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let nl = document().query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    let nl = parent.query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
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

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

/// A `data-*` attribute, trimmed; `None` when absent or empty.
pub fn data(el: &Element, name: &str) -> Option<String> {
    let v = el.get_attribute(name)?;
    let v = v.trim();
    if v.is_empty() { None } else { Some(v.to_string()) }
}

/// Show or hide via inline display style.
pub fn set_visible(el: &Element, visible: bool) {
    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
        let style = html.style();
        if visible {
            let _ = style.remove_property("display");
        } else {
            let _ = style.set_property("display", "none");
        }
    }
}

/// Inline overflow style currently set on `<body>`, usually empty.
pub fn body_overflow() -> String {
    body().style().get_property_value("overflow").unwrap_or_default()
}

pub fn set_body_overflow(value: &str) {
    let style = body().style();
    if value.is_empty() {
        let _ = style.remove_property("overflow");
    } else {
        let _ = style.set_property("overflow", value);
    }
}

/// Full reload; the server-rendered markup becomes authoritative again.
pub fn reload_page() {
    let _ = window().location().reload();
}

// ── Elements struct ──

/// DOM references resolved once at startup.
#[derive(Clone, Default)]
pub struct Elements {
    /// Cart panel root; pages without a cart panel get a no-op controller.
    pub panel: Option<Element>,
    /// Product option groups, in markup order.
    pub option_groups: Vec<Element>,
}

impl Elements {
    /// Resolve all bind-once references. Never fails: missing markup means
    /// the matching component stays inert.
    pub fn bind() -> Elements {
        Elements {
            panel: query("[data-cart-panel]"),
            option_groups: query_all("[data-option-group]"),
        }
    }
}
