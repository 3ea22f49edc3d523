//! Browser-side bindings: the conversion request and the clipboard.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

use toonmaker_core::{
    ConversionError, ConversionResult, ConvertRequest, DEFAULT_CONVERT_ENDPOINT,
    interpret_response,
};

/// Send one conversion request through the browser's fetch.
pub async fn convert(request: &ConvertRequest) -> ConversionResult<String> {
    let resp = reqwest::Client::new()
        .post(DEFAULT_CONVERT_ENDPOINT)
        .json(request)
        .send()
        .await
        .map_err(|e| ConversionError::transport(e.to_string()))?;

    let status = resp.status().as_u16();
    let body = resp
        .bytes()
        .await
        .map_err(|e| ConversionError::transport(e.to_string()))?;

    interpret_response(status, &body)
}

/// Write `text` with `navigator.clipboard.writeText`.
pub async fn write_clipboard(text: &str) -> Result<(), String> {
    let window = window().ok_or_else(|| "No window object".to_string())?;

    let navigator = js_sys::Reflect::get(&window, &JsValue::from_str("navigator"))
        .map_err(|e| format!("Failed to get navigator: {:?}", e))?;

    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| format!("Failed to get clipboard: {:?}", e))?;
    if clipboard.is_undefined() {
        return Err("Clipboard API unavailable".to_string());
    }

    let write_fn = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| format!("Failed to get writeText: {:?}", e))?;

    let promise = js_sys::Function::from(write_fn)
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| format!("Failed to call writeText: {:?}", e))?;

    JsFuture::from(js_sys::Promise::from(promise))
        .await
        .map(|_| ())
        .map_err(|e| format!("writeText failed: {:?}", e))
}
