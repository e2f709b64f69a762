//! Cart Error Taxonomy
//!
//! Every remote cart operation resolves to `Result<_, CartError>`. No retry
//! policy: a failure is terminal for that gesture and the owning component
//! decides how to surface it.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error)]
pub enum CartError {
    /// The fetch itself rejected (offline, DNS, aborted).
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response; `description` comes from the service error body
    /// when present.
    #[error("server error ({status}): {description}")]
    Server { status: u16, description: String },

    /// 2xx response whose body did not match the expected shape.
    #[error("unexpected response shape: {0}")]
    Parse(String),
}

/// Stringify a caught JS exception for logging / `CartError::Network`.
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| js_sys::Reflect::get(value, &JsValue::from_str("message")).ok()?.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
