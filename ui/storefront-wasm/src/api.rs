//! HTTP client for the storefront cart API.
//!
//! Wraps `fetch` for JSON round-trips. Endpoint URLs come from the `routes`
//! global the hosting page defines; nothing is hardcoded. Errors are
//! stringified transport/HTTP failures for the caller to log.

use vt_cart_types::{Cart, CartAddRequest, CartChangeRequest, Routes};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

/// Read the page-supplied `routes` global.
pub fn page_routes() -> Result<Routes, String> {
    let window = gloo_utils::window();
    let value = js_sys::Reflect::get(&window, &JsValue::from_str("routes"))
        .map_err(|e| format!("{e:?}"))?;
    if value.is_undefined() || value.is_null() {
        return Err("missing `routes` global".to_string());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| format!("invalid `routes` global: {e}"))
}

/// Perform a fetch request, returning the response body on a 2xx status.
async fn request(url: &str, method: &str, body: Option<String>) -> Result<String, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    let headers = Headers::new().map_err(|e| format!("{e:?}"))?;
    headers
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    if let Some(ref b) = body {
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| format!("{e:?}"))?;
        opts.set_body(&JsValue::from_str(b));
    }

    opts.set_headers(&headers);

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = gloo_utils::window();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch error: {e:?}"))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "response is not a Response".to_string())?;

    let text = JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("text error: {e:?}"))?;

    let text_str = text.as_string().unwrap_or_default();

    if !resp.ok() {
        return Err(format!(
            "{} {}: {}",
            resp.status(),
            resp.status_text(),
            text_str
        ));
    }

    Ok(text_str)
}

/// `POST <cart_add_url>`: add a variant to the cart.
pub async fn add_item(routes: &Routes, req: &CartAddRequest) -> Result<(), String> {
    let body = serde_json::to_string(req).map_err(|e| e.to_string())?;
    request(&routes.cart_add_url, "POST", Some(body)).await?;
    Ok(())
}

/// `GET <cart_url>`: the current cart.
pub async fn fetch_cart(routes: &Routes) -> Result<Cart, String> {
    let text = request(&routes.cart_url, "GET", None).await?;
    serde_json::from_str(&text).map_err(|e| format!("cart JSON parse error: {e}"))
}

/// `POST <cart_change_url>`: set a line's quantity; 0 removes it.
pub async fn change_item(routes: &Routes, req: &CartChangeRequest) -> Result<(), String> {
    let body = serde_json::to_string(req).map_err(|e| e.to_string())?;
    request(&routes.cart_change_url, "POST", Some(body)).await?;
    Ok(())
}
