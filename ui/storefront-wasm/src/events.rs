//! Event wiring.
//!
//! One delegated click listener on the document resolves the nearest
//! `[data-action]` ancestor to the closed [`Action`] enum and dispatches on
//! it; a delegated submit listener catches the add-to-cart form, and a
//! keydown listener closes the panel on Escape. Line-item rows are
//! re-rendered by the server, so delegation is what keeps their buttons live
//! across reloads without rebinding.

use vt_cart_core::Action;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::{add_item, dom, line_items, App};

/// Bind all document-level listeners. Call once after init.
pub fn bind_events(app: &App) {
    let document = gloo_utils::document();

    // ── Click dispatch ──
    {
        let app = app.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            let Some((action, el)) = action_target(&e) else {
                return;
            };
            dispatch(&app, action, el, &e);
        }) as Box<dyn FnMut(_)>);
        document
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Add-to-cart form ──
    {
        let app = app.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
            let Some(form) = event_element(&e)
                .and_then(|el| el.closest("form[data-type=\"add-to-cart-form\"]").ok())
                .flatten()
            else {
                return;
            };
            e.prevent_default();
            let app = app.clone();
            wasm_bindgen_futures::spawn_local(async move {
                add_item::on_form_submit(app, form).await;
            });
        }) as Box<dyn FnMut(_)>);
        document
            .add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Escape closes the panel ──
    {
        let app = app.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
            if e.key() == "Escape" && app.panel.is_open() {
                app.panel.close();
            }
        }) as Box<dyn FnMut(_)>);
        document
            .add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
}

/// Resolve a click to its action role and the tagged element.
fn action_target(e: &web_sys::MouseEvent) -> Option<(Action, Element)> {
    resolve_action(&event_element(e)?)
}

/// Walk up from `el` to the nearest `[data-action]` ancestor and parse its
/// tag. Unknown tags resolve to `None`.
pub fn resolve_action(el: &Element) -> Option<(Action, Element)> {
    let tagged = el.closest("[data-action]").ok()??;
    let action = Action::from_tag(&tagged.get_attribute("data-action")?)?;
    Some((action, tagged))
}

fn event_element(e: &web_sys::Event) -> Option<Element> {
    e.target()?.dyn_into::<Element>().ok()
}

/// The dispatch table: one arm per action kind.
fn dispatch(app: &App, action: Action, el: Element, e: &web_sys::MouseEvent) {
    match action {
        Action::CartClose => app.panel.close(),
        Action::AddToCart => {
            e.prevent_default();
            let app = app.clone();
            wasm_bindgen_futures::spawn_local(async move {
                add_item::on_add_click(app, el).await;
            });
        }
        Action::IncreaseQuantity | Action::DecreaseQuantity => {
            let Some(key) = dom::data(&el, "data-key") else {
                return;
            };
            let Some(delta) = action.quantity_delta() else {
                return;
            };
            let app = app.clone();
            wasm_bindgen_futures::spawn_local(async move {
                line_items::on_quantity_delta(app, key, delta).await;
            });
        }
        Action::RemoveItem => {
            let Some(key) = dom::data(&el, "data-key") else {
                return;
            };
            let app = app.clone();
            wasm_bindgen_futures::spawn_local(async move {
                line_items::on_remove(app, key).await;
            });
        }
    }
}
