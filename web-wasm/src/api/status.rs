//! 配信ステータスの取得

use super::{fetch_ok, to_js_error};
use emote_gallery_common::live_status::STATUS_ENDPOINT;
use emote_gallery_common::parse_status_payload;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{RequestInit, RequestMode};

pub const CHANNEL: &str = "clonk_4_ever";

/// `Some` ならAPIの判定を無視して常にその状態を表示
pub const LIVE_OVERRIDE: Option<bool> = None;

pub fn channel_url(channel: &str) -> String {
    format!("https://www.twitch.tv/{}", channel)
}

pub async fn fetch_live_status(channel: &str) -> Result<bool, JsValue> {
    let login = String::from(js_sys::encode_uri_component(channel));
    let url = format!("{}?login={}", STATUS_ENDPOINT, login);

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let resp = fetch_ok(&url, &opts).await?;
    let json = JsFuture::from(resp.json()?).await?;
    let payload: serde_json::Value = serde_wasm_bindgen::from_value(json)?;

    parse_status_payload(&payload, LIVE_OVERRIDE).map_err(to_js_error)
}
