//! Cart line-item actions.
//!
//! Quantity clicks re-fetch the cart, clamp through the core quantity rules,
//! POST the change, and reload the page; the server-rendered markup is the
//! consistency mechanism, not an incremental DOM patch. Two rapid clicks on
//! the same line can each read the same starting quantity; requests are not
//! serialized per key, and the reload re-synchronizes on whatever the server
//! last accepted.

use gloo_console::error;
use vt_cart_core::quantity;
use vt_cart_types::CartChangeRequest;

use crate::{api, dom, App};

/// Click on `[data-action="increase-quantity"]` / `"decrease-quantity"`.
pub async fn on_quantity_delta(app: App, key: String, delta: i32) {
    let cart = match api::fetch_cart(&app.routes).await {
        Ok(cart) => cart,
        Err(e) => {
            error!("error changing quantity:", e);
            return;
        }
    };

    // Unknown key: the row is stale; send nothing.
    let Some(req) = quantity::change_for(&cart, &key, delta) else {
        return;
    };

    match api::change_item(&app.routes, &req).await {
        Ok(()) => dom::reload_page(),
        Err(e) => error!("error changing quantity:", e),
    }
}

/// Click on `[data-action="remove-item"]`: quantity 0 removes the line.
pub async fn on_remove(app: App, key: String) {
    let req = CartChangeRequest {
        id: key,
        quantity: 0,
    };

    match api::change_item(&app.routes, &req).await {
        Ok(()) => dom::reload_page(),
        Err(e) => error!("error removing item:", e),
    }
}
