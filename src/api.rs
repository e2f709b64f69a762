//! Cart Service Bindings
//!
//! Async wrappers over the remote cart endpoints, one per operation. All
//! routes come from the theme config; nothing in here touches globals other
//! than `window` for the fetch itself.

use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::config::CartRoutes;
use crate::error::{js_error_message, CartError};
use crate::models::CartSnapshot;

// ========================
// Request Body Structs
// ========================

#[derive(Serialize)]
struct AddBody {
    items: Vec<AddLine>,
}

#[derive(Serialize)]
struct AddLine {
    id: u64,
    quantity: u32,
}

#[derive(Serialize)]
struct ChangeBody {
    line: u32,
    quantity: u32,
}

#[derive(Serialize)]
struct NoteBody<'a> {
    note: &'a str,
}

/// Shape of a non-2xx error payload; every field optional in practice.
#[derive(Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    description: String,
}

// ========================
// Cart Operations
// ========================

/// POST an item to the cart. Body: `{"items":[{"id","quantity"}]}`.
pub async fn add_item(
    routes: &CartRoutes,
    variant_id: u64,
    quantity: u32,
) -> Result<CartSnapshot, CartError> {
    let body = AddBody {
        items: vec![AddLine {
            id: variant_id,
            quantity,
        }],
    };
    let json = post_json(&routes.add, &body).await?;
    decode_snapshot(json)
}

/// Set the absolute quantity of a 1-based cart line. Quantity 0 removes it.
pub async fn change_line(
    routes: &CartRoutes,
    line: u32,
    quantity: u32,
) -> Result<CartSnapshot, CartError> {
    let body = ChangeBody { line, quantity };
    let json = post_json(&routes.change, &body).await?;
    decode_snapshot(json)
}

/// Persist the cart note. The response body is not interesting.
pub async fn update_note(routes: &CartRoutes, note: &str) -> Result<(), CartError> {
    post_json(&routes.update, &NoteBody { note }).await?;
    Ok(())
}

/// Fetch the current cart state. Idempotent; used as the fallback refresh.
pub async fn get_cart(routes: &CartRoutes) -> Result<CartSnapshot, CartError> {
    let json = fetch_json(build_request("GET", &routes.cart, None)?).await?;
    decode_snapshot(json)
}

// ========================
// Fetch Plumbing
// ========================

async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<JsValue, CartError> {
    let payload =
        serde_json::to_string(body).map_err(|e| CartError::Parse(e.to_string()))?;
    fetch_json(build_request("POST", url, Some(&payload))?).await
}

fn build_request(method: &str, url: &str, body: Option<&str>) -> Result<Request, CartError> {
    let init = RequestInit::new();
    init.set_method(method);
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(body));
    }
    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|e| CartError::Network(js_error_message(&e)))?;
    let headers = request.headers();
    headers
        .set("Content-Type", "application/json")
        .and_then(|_| headers.set("Accept", "application/json"))
        .map_err(|e| CartError::Network(js_error_message(&e)))?;
    Ok(request)
}

/// Run the request, enforce 2xx, and return the decoded JSON body.
async fn fetch_json(request: Request) -> Result<JsValue, CartError> {
    let window =
        web_sys::window().ok_or_else(|| CartError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| CartError::Network(js_error_message(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| CartError::Parse("fetch resolved to a non-Response".to_string()))?;

    let status = response.status();
    let json = match response.json() {
        Ok(promise) => JsFuture::from(promise).await.ok(),
        Err(_) => None,
    };

    if !response.ok() {
        let description = json
            .and_then(|v| serde_wasm_bindgen::from_value::<ErrorBody>(v).ok())
            .map(|b| b.description)
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "cart request failed".to_string());
        return Err(CartError::Server {
            status,
            description,
        });
    }

    json.ok_or_else(|| CartError::Parse("response body was not JSON".to_string()))
}

fn decode_snapshot(json: JsValue) -> Result<CartSnapshot, CartError> {
    serde_wasm_bindgen::from_value(json).map_err(|e| CartError::Parse(e.to_string()))
}
