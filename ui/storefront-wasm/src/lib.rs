//! Storefront behavior layer, compiled to WASM.
//!
//! Four controllers bound once at page load: the cart panel, add-to-cart,
//! line-item quantity changes, and the product option selector, plus a
//! one-shot scroll-reveal observer. They share nothing but the DOM and the
//! `cart:updated` broadcast; cart data itself lives on the remote storefront
//! API and is re-fetched per operation.

pub mod add_item;
pub mod api;
pub mod dom;
pub mod events;
pub mod line_items;
pub mod options;
pub mod panel;
pub mod reveal;

use std::rc::Rc;

use vt_cart_types::Routes;
use wasm_bindgen::prelude::*;

use crate::panel::PanelController;

/// Everything an event handler needs, passed by value into spawned futures.
/// The panel handle is an explicit dependency, not a window global.
#[derive(Clone)]
pub struct App {
    pub routes: Routes,
    pub panel: Rc<PanelController>,
}

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    if let Err(e) = init() {
        gloo_console::error!("storefront init failed:", e);
    }
}

/// Main initialisation sequence. The panel controller is constructed first so
/// its handle can be injected into the add-to-cart flow.
fn init() -> Result<(), String> {
    let routes = api::page_routes()?;
    let els = dom::Elements::bind();

    let panel = PanelController::bind(&els);
    let app = App { routes, panel };

    events::bind_events(&app);
    options::bind(&els);
    reveal::install();

    Ok(())
}
