//! Quantity arithmetic for cart lines and the add-to-cart form.

use vt_cart_types::{Cart, CartChangeRequest};

/// Outcome of applying a quantity delta to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// Send the new, still-positive quantity.
    Set(u32),
    /// The line hits zero: route through the removal path.
    Remove,
}

/// Clamp `current + delta` at zero. Zero means removal; a negative quantity
/// is never produced.
pub fn apply_delta(current: u32, delta: i32) -> QuantityChange {
    let next = (i64::from(current) + i64::from(delta)).clamp(0, i64::from(u32::MAX));
    if next == 0 {
        QuantityChange::Remove
    } else {
        QuantityChange::Set(next as u32)
    }
}

/// The change request a ±1 click on line `key` should send, given the cart
/// just fetched. `None` when the key is not in the cart (stale row: abort
/// silently, no request).
pub fn change_for(cart: &Cart, key: &str, delta: i32) -> Option<CartChangeRequest> {
    let item = cart.item_by_key(key)?;
    let quantity = match apply_delta(item.quantity, delta) {
        QuantityChange::Set(q) => q,
        QuantityChange::Remove => 0,
    };
    Some(CartChangeRequest {
        id: key.to_string(),
        quantity,
    })
}

/// Quantity policy for the add-to-cart form: a missing field means one unit,
/// and anything unparsable or below one clamps to one.
pub fn parse_requested_quantity(raw: Option<&str>) -> u32 {
    match raw {
        None => 1,
        Some(s) => s.trim().parse::<u32>().unwrap_or(1).max(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vt_cart_types::LineItem;

    fn cart_with(key: &str, quantity: u32) -> Cart {
        Cart {
            item_count: quantity,
            items: vec![LineItem {
                key: key.into(),
                quantity,
                ..Default::default()
            }],
        }
    }

    #[test]
    fn increase_sets_next_quantity() {
        assert_eq!(apply_delta(2, 1), QuantityChange::Set(3));
    }

    #[test]
    fn decrease_to_zero_routes_to_removal() {
        assert_eq!(apply_delta(1, -1), QuantityChange::Remove);
    }

    #[test]
    fn any_nonpositive_result_is_removal_never_negative() {
        assert_eq!(apply_delta(0, -1), QuantityChange::Remove);
        assert_eq!(apply_delta(3, -5), QuantityChange::Remove);
        assert_eq!(apply_delta(0, 0), QuantityChange::Remove);
    }

    #[test]
    fn change_for_known_key_sends_clamped_quantity() {
        let cart = cart_with("v1:a", 1);
        let req = change_for(&cart, "v1:a", -1).unwrap();
        assert_eq!(req.quantity, 0);
        assert_eq!(req.id, "v1:a");

        let req = change_for(&cart, "v1:a", 1).unwrap();
        assert_eq!(req.quantity, 2);
    }

    #[test]
    fn change_for_unknown_key_is_none() {
        let cart = cart_with("v1:a", 1);
        assert!(change_for(&cart, "v9:z", 1).is_none());
    }

    #[test]
    fn form_quantity_defaults_and_clamps() {
        assert_eq!(parse_requested_quantity(None), 1);
        assert_eq!(parse_requested_quantity(Some("3")), 3);
        assert_eq!(parse_requested_quantity(Some(" 2 ")), 2);
        assert_eq!(parse_requested_quantity(Some("0")), 1);
        assert_eq!(parse_requested_quantity(Some("-4")), 1);
        assert_eq!(parse_requested_quantity(Some("abc")), 1);
        assert_eq!(parse_requested_quantity(Some("")), 1);
    }
}
