//! Cart panel controller.
//!
//! Holds the panel root and a [`PanelState`]; `open`/`close` write the state's
//! projection onto the DOM: the `is-open` class, `aria-hidden`, and the body
//! scroll lock. Every operation no-ops when the page has no panel.
//!
//! The controller is constructed first at bootstrap and handed to whatever
//! needs it as an explicit `Rc` handle.

use std::cell::RefCell;
use std::rc::Rc;

use vt_cart_core::{PanelProjection, PanelState};
use web_sys::Element;

use crate::dom::{self, Elements};

pub struct PanelController {
    el: Option<Element>,
    state: RefCell<PanelState>,
}

impl PanelController {
    pub fn bind(els: &Elements) -> Rc<Self> {
        Rc::new(Self {
            el: els.panel.clone(),
            state: RefCell::new(PanelState::new()),
        })
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    pub fn open(&self) {
        let Some(el) = &self.el else { return };
        let projection = self.state.borrow_mut().open(&dom::body_overflow());
        apply(el, &projection);
    }

    pub fn close(&self) {
        let Some(el) = &self.el else { return };
        let projection = self.state.borrow_mut().close();
        apply(el, &projection);
    }
}

fn apply(el: &Element, projection: &PanelProjection) {
    dom::toggle_class(el, "is-open", projection.open_class);
    let _ = el.set_attribute("aria-hidden", projection.aria_hidden);
    dom::set_body_overflow(&projection.body_overflow);
}
