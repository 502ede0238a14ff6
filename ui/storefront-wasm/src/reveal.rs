//! Scroll reveal.
//!
//! One-shot bootstrap utility: every `[data-animate]` element gets the
//! `is-visible` class when 10% of it enters the viewport, and is unobserved
//! after firing. Not restartable.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

const THRESHOLD: f64 = 0.1;

/// Observe all reveal targets. Call once after init.
pub fn install() {
    let targets = dom::query_all("[data-animate]");
    if targets.is_empty() {
        return;
    }

    let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for i in 0..entries.length() {
                let Ok(entry) = entries.get(i).dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::add_class(&target, "is-visible");
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));

    let Ok(observer) =
        IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)
    else {
        return;
    };

    for target in &targets {
        observer.observe(target);
    }

    // The observer outlives this call; the callback leaks with it.
    cb.forget();
}
