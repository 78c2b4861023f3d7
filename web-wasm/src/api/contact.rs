//! お問い合わせフォームの送信

use super::fetch_ok;
use emote_gallery_common::contact::FORM_ENDPOINT;
use wasm_bindgen::prelude::*;
use web_sys::{FormData, HtmlFormElement, RequestInit, RequestMode};

/// フォームの内容を送信（本文は検証済みのメッセージで置き換える）
pub async fn send_message(form: &HtmlFormElement, message: &str) -> Result<(), JsValue> {
    let data = FormData::new_with_form(form)?;
    data.set_with_str("message", message)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&data.into());

    fetch_ok(FORM_ENDPOINT, &opts).await?;
    Ok(())
}
