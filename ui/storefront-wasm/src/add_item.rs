//! Add-to-cart flow.
//!
//! Two triggers: a tagged add button carrying `data-variant-id`, and the
//! product form carrying a variant input plus an optional quantity input.
//! Either way: mark the trigger busy, POST the add, re-fetch the cart,
//! project the count badges, broadcast `cart:updated`, open the panel.
//! Failures are logged to the console channel and leave the page as it was;
//! the busy marker always comes off.

use gloo_console::error;
use vt_cart_core::{badge_projection, parse_requested_quantity};
use vt_cart_types::{Cart, CartAddRequest};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit, Element, HtmlInputElement};

use crate::{api, dom, App};

/// Click on `[data-action="add-to-cart"]`.
pub async fn on_add_click(app: App, trigger: Element) {
    let Some(variant_id) = dom::data(&trigger, "data-variant-id") else {
        return;
    };

    set_busy(&trigger, true);
    add_then_refresh(&app, &variant_id, 1).await;
    set_busy(&trigger, false);
}

/// Submit of `form[data-type="add-to-cart-form"]`.
pub async fn on_form_submit(app: App, form: Element) {
    let Some(variant_id) = input_value(&form, "[data-product-variant-id]") else {
        return;
    };
    let quantity_raw = input_value(&form, "[data-quantity-input]");
    let quantity = parse_requested_quantity(quantity_raw.as_deref());

    let submit_btn = form.query_selector("[type=\"submit\"]").ok().flatten();

    if let Some(btn) = &submit_btn {
        set_busy(btn, true);
    }
    add_then_refresh(&app, &variant_id, quantity).await;
    if let Some(btn) = &submit_btn {
        set_busy(btn, false);
    }
}

/// POST the add; only a successful add refreshes the cart UI and opens the
/// panel. A failed cart re-fetch is logged inside `refresh_cart_ui` and the
/// panel still opens, since the add itself went through.
async fn add_then_refresh(app: &App, variant_id: &str, quantity: u32) {
    let req = CartAddRequest {
        id: variant_id.to_string(),
        quantity,
    };
    match api::add_item(&app.routes, &req).await {
        Ok(()) => {
            refresh_cart_ui(app).await;
            app.panel.open();
        }
        Err(e) => error!("error adding to cart:", e),
    }
}

/// Re-fetch the cart, project the count badges, broadcast `cart:updated`.
pub async fn refresh_cart_ui(app: &App) {
    match api::fetch_cart(&app.routes).await {
        Ok(cart) => {
            render_count_badges(&cart);
            broadcast_cart_updated(&cart);
        }
        Err(e) => error!("error updating cart UI:", e),
    }
}

/// Project the aggregate count onto every `[data-cart-count]` element.
pub fn render_count_badges(cart: &Cart) {
    let projection = badge_projection(cart.item_count);
    for el in dom::query_all("[data-cart-count]") {
        dom::set_text(&el, &projection.text);
        dom::set_visible(&el, projection.visible);
    }
}

/// Fan-out notification for independent listeners; detail is the cart payload.
fn broadcast_cart_updated(cart: &Cart) {
    let detail = serde_wasm_bindgen::to_value(cart).unwrap_or(JsValue::NULL);
    let init = CustomEventInit::new();
    init.set_detail(&detail);
    if let Ok(event) = CustomEvent::new_with_event_init_dict("cart:updated", &init) {
        let _ = gloo_utils::document().dispatch_event(&event);
    }
}

/// Busy marker: visual class plus disabled, held for the request's duration.
fn set_busy(el: &Element, busy: bool) {
    dom::toggle_class(el, "is-adding", busy);
    if let Some(btn) = el.dyn_ref::<web_sys::HtmlButtonElement>() {
        btn.set_disabled(busy);
    } else if busy {
        let _ = el.set_attribute("disabled", "disabled");
    } else {
        let _ = el.remove_attribute("disabled");
    }
}

fn input_value(form: &Element, selector: &str) -> Option<String> {
    let input = form
        .query_selector(selector)
        .ok()??
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    let value = input.value().trim().to_string();
    if value.is_empty() { None } else { Some(value) }
}
