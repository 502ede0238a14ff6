//! Wire types for the storefront cart API and the hosting page's route
//! configuration.
//!
//! The cart is owned by the remote storefront service; these models describe
//! only the fields this layer reads. Remote payloads carry more, so every
//! deserialization here tolerates unknown fields.

use serde::{Deserialize, Serialize};

/// Endpoint URLs supplied by the hosting page as the `routes` global.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Routes {
    pub cart_add_url: String,
    pub cart_url: String,
    pub cart_change_url: String,
}

/// The remote cart: aggregate count plus ordered line items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    pub item_count: u32,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl Cart {
    /// Locate a line item by its opaque key.
    pub fn item_by_key(&self, key: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.key == key)
    }
}

/// One cart line, identified by a key unique per variant + customization
/// combination.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineItem {
    pub key: String,
    pub quantity: u32,
    #[serde(default)]
    pub variant_id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Body for `POST <cart_add_url>`; `id` is the variant identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartAddRequest {
    pub id: String,
    pub quantity: u32,
}

/// Body for `POST <cart_change_url>`; `id` is the line key and quantity 0
/// removes the line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartChangeRequest {
    pub id: String,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_decodes_with_unknown_fields() {
        let json = r#"{
            "token": "abc123",
            "item_count": 3,
            "total_price": 4500,
            "items": [
                {"key": "v1:a", "quantity": 2, "variant_id": 111, "price": 1500},
                {"key": "v2:b", "quantity": 1, "title": "Mug"}
            ]
        }"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.item_count, 3);
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].variant_id, Some(111));
        assert_eq!(cart.items[1].title.as_deref(), Some("Mug"));
    }

    #[test]
    fn empty_cart_decodes() {
        let cart: Cart = serde_json::from_str(r#"{"item_count": 0, "items": []}"#).unwrap();
        assert_eq!(cart.item_count, 0);
        assert!(cart.items.is_empty());
    }

    #[test]
    fn item_lookup_by_key() {
        let cart: Cart = serde_json::from_str(
            r#"{"item_count": 1, "items": [{"key": "v1:a", "quantity": 4}]}"#,
        )
        .unwrap();
        assert_eq!(cart.item_by_key("v1:a").map(|i| i.quantity), Some(4));
        assert!(cart.item_by_key("v9:z").is_none());
    }

    #[test]
    fn add_request_body_shape() {
        let body = CartAddRequest {
            id: "123".into(),
            quantity: 1,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"id":"123","quantity":1}"#
        );
    }

    #[test]
    fn removal_body_sends_zero_quantity() {
        let body = CartChangeRequest {
            id: "v1:a".into(),
            quantity: 0,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"id":"v1:a","quantity":0}"#
        );
    }

    #[test]
    fn routes_decode() {
        let routes: Routes = serde_json::from_str(
            r#"{"cart_add_url": "/cart/add", "cart_url": "/cart", "cart_change_url": "/cart/change"}"#,
        )
        .unwrap();
        assert_eq!(routes.cart_url, "/cart");
    }
}
