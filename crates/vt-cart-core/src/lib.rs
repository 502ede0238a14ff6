//! Controller state for the storefront behavior layer.
//!
//! Each UI component keeps its state in an explicit struct here; the DOM
//! layer renders by projecting that state onto classes and attributes. None
//! of these operations touch the browser, so all of them test natively.

pub mod action;
pub mod badge;
pub mod options;
pub mod panel;
pub mod quantity;

pub use action::Action;
pub use badge::{badge_projection, BadgeProjection};
pub use options::{OptionBoard, OptionButton, OptionGroup};
pub use panel::{PanelProjection, PanelState};
pub use quantity::{apply_delta, parse_requested_quantity, QuantityChange};
