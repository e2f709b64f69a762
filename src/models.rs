//! Frontend Models
//!
//! Data structures matching the remote cart service and the injected catalog.

use serde::{Deserialize, Serialize};

/// Full cart state as returned by the cart service after any operation.
///
/// Authoritative: on receipt it fully replaces whatever the UI was showing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub item_count: u32,
    /// Subtotal in minor currency units (paise, cents, ...).
    pub total_price: i64,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// One cart entry. The 1-based line number is positional (index + 1 at
/// render time) and is never stored on the item itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    /// Unit price in minor currency units.
    #[serde(default)]
    pub price: i64,
    pub quantity: u32,
}

/// Catalog entry injected by the host page via the theme config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub variant_id: u64,
    pub title: String,
    pub price: i64,
    #[serde(default)]
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_decodes_service_shape() {
        let json = r#"{"item_count":2,"total_price":1500,"items":[
            {"id":123456,"title":"Silk Scarf","price":500,"quantity":1},
            {"id":789,"quantity":2}
        ]}"#;
        let snap: CartSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.item_count, 2);
        assert_eq!(snap.total_price, 1500);
        assert_eq!(snap.items.len(), 2);
        assert_eq!(snap.items[0].title, "Silk Scarf");
        // Missing optional fields fall back to defaults
        assert_eq!(snap.items[1].title, "");
        assert_eq!(snap.items[1].price, 0);
    }

    #[test]
    fn test_snapshot_without_items_defaults_empty() {
        let snap: CartSnapshot =
            serde_json::from_str(r#"{"item_count":0,"total_price":0}"#).unwrap();
        assert!(snap.items.is_empty());
    }
}
