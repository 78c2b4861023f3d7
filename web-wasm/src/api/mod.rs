//! fetch APIのラッパー
//!
//! カタログ・音楽リスト・配信ステータス・お問い合わせ送信

pub mod contact;
pub mod gallery;
pub mod status;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// リクエストを送信し、2xx以外はエラーにする
pub async fn fetch_ok(url: &str, opts: &RequestInit) -> Result<Response, JsValue> {
    let request = Request::new_with_str_and_init(url, opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP error: {}", resp.status())));
    }

    Ok(resp)
}

/// GETして本文を文字列で取得
pub async fn fetch_text(url: &str) -> Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");

    let resp = fetch_ok(url, &opts).await?;
    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}

pub(crate) fn to_js_error(err: emote_gallery_common::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}
