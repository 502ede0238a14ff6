//! Product option selector.
//!
//! Builds an [`OptionBoard`] from the markup at bind time, then re-projects a
//! group's `is-active` markers and its `(Value)` label after every accepted
//! click. Selections are tracked only; resolving the chosen combination to a
//! purchasable variant needs the variant catalog and happens elsewhere.

use std::cell::RefCell;
use std::rc::Rc;

use vt_cart_core::{OptionBoard, OptionButton, OptionGroup};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom::{self, Elements};

const BUTTON_SELECTOR: &str = "[data-option-value]";
const ACTIVE_CLASS: &str = "is-active";

/// Bind click handlers on every option button. Call once after init.
pub fn bind(els: &Elements) {
    if els.option_groups.is_empty() {
        return;
    }

    let group_els: Rc<Vec<Element>> = Rc::new(els.option_groups.clone());
    let board = Rc::new(RefCell::new(board_from_dom(&group_els)));

    for (group_idx, group_el) in group_els.iter().enumerate() {
        for (button_idx, button_el) in dom::query_all_within(group_el, BUTTON_SELECTOR)
            .into_iter()
            .enumerate()
        {
            let board = Rc::clone(&board);
            let group_els = Rc::clone(&group_els);
            let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
                // Disabled buttons don't fire clicks, but the board guards
                // against them anyway; a rejected select changes nothing.
                if board.borrow_mut().select(group_idx, button_idx) {
                    project(&group_els, &board.borrow());
                }
            }) as Box<dyn FnMut(_)>);
            button_el
                .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
                .unwrap();
            cb.forget();
        }
    }
}

/// Read the initial board out of the markup: button values, disabled flags,
/// and any pre-set active markers.
fn board_from_dom(group_els: &[Element]) -> OptionBoard {
    let groups = group_els
        .iter()
        .map(|group_el| {
            let mut active = None;
            let buttons = dom::query_all_within(group_el, BUTTON_SELECTOR)
                .into_iter()
                .enumerate()
                .map(|(i, el)| {
                    if dom::has_class(&el, ACTIVE_CLASS) && active.is_none() {
                        active = Some(i);
                    }
                    OptionButton {
                        value: dom::data(&el, "data-option-value").unwrap_or_default(),
                        disabled: el.has_attribute("disabled"),
                    }
                })
                .collect();
            OptionGroup::new(buttons, active)
        })
        .collect();
    OptionBoard::new(groups)
}

/// Project the board back onto the markup: active markers and labels.
fn project(group_els: &[Element], board: &OptionBoard) {
    for (group_el, group) in group_els.iter().zip(&board.groups) {
        for (i, button_el) in dom::query_all_within(group_el, BUTTON_SELECTOR)
            .into_iter()
            .enumerate()
        {
            dom::toggle_class(&button_el, ACTIVE_CLASS, group.active() == Some(i));
        }
        if let (Some(label_el), Some(text)) = (
            group_el.query_selector("[data-option-label]").ok().flatten(),
            group.label(),
        ) {
            dom::set_text(&label_el, &text);
        }
    }
}
