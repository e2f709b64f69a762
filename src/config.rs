//! Theme Configuration
//!
//! Explicit configuration struct deserialized once from the host page's
//! `window.theme` global at startup. Every field has a default, so a missing
//! or partial global still yields a working client. Components never reach
//! for the global themselves; they get this struct (or the context built
//! from it).

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::models::Product;
use crate::money::DEFAULT_MONEY_FORMAT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(rename = "moneyFormat", default = "default_money_format")]
    pub money_format: String,
    #[serde(default)]
    pub routes: CartRoutes,
    /// Catalog entries the host page wants rendered (hero grid, detail page).
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartRoutes {
    #[serde(rename = "cartAdd", default = "default_cart_add")]
    pub add: String,
    #[serde(rename = "cartChange", default = "default_cart_change")]
    pub change: String,
    #[serde(rename = "cartUpdate", default = "default_cart_update")]
    pub update: String,
    #[serde(rename = "cart", default = "default_cart")]
    pub cart: String,
}

fn default_money_format() -> String {
    DEFAULT_MONEY_FORMAT.to_string()
}

fn default_cart_add() -> String {
    "/cart/add.js".to_string()
}

fn default_cart_change() -> String {
    "/cart/change.js".to_string()
}

fn default_cart_update() -> String {
    "/cart/update.js".to_string()
}

fn default_cart() -> String {
    "/cart.js".to_string()
}

impl Default for CartRoutes {
    fn default() -> Self {
        Self {
            add: default_cart_add(),
            change: default_cart_change(),
            update: default_cart_update(),
            cart: default_cart(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            money_format: default_money_format(),
            routes: CartRoutes::default(),
            products: Vec::new(),
        }
    }
}

impl ThemeConfig {
    /// Read `window.theme`; any missing piece falls back to defaults.
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let Ok(theme) = js_sys::Reflect::get(&window, &JsValue::from_str("theme")) else {
            return Self::default();
        };
        if theme.is_undefined() || theme.is_null() {
            return Self::default();
        }
        serde_wasm_bindgen::from_value(theme).unwrap_or_else(|e| {
            web_sys::console::warn_1(
                &format!("[CONFIG] window.theme did not deserialize, using defaults: {e}").into(),
            );
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gets_defaults() {
        let config: ThemeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.money_format, "₹{{amount}}");
        assert_eq!(config.routes.add, "/cart/add.js");
        assert_eq!(config.routes.change, "/cart/change.js");
        assert_eq!(config.routes.update, "/cart/update.js");
        assert_eq!(config.routes.cart, "/cart.js");
        assert!(config.products.is_empty());
    }

    #[test]
    fn test_partial_routes_keep_other_defaults() {
        let config: ThemeConfig = serde_json::from_str(
            r#"{"moneyFormat":"${{amount}}","routes":{"cartAdd":"/en/cart/add.js"}}"#,
        )
        .unwrap();
        assert_eq!(config.money_format, "${{amount}}");
        assert_eq!(config.routes.add, "/en/cart/add.js");
        assert_eq!(config.routes.change, "/cart/change.js");
    }

    #[test]
    fn test_products_deserialize() {
        let config: ThemeConfig = serde_json::from_str(
            r#"{"products":[{"variant_id":123456,"title":"Silk Scarf","price":500,
                "images":["//cdn/scarf.jpg?width=120"]}]}"#,
        )
        .unwrap();
        assert_eq!(config.products.len(), 1);
        assert_eq!(config.products[0].variant_id, 123456);
    }
}
