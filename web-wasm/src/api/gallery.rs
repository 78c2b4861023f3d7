//! 静的ファイル（emotes.json / music-list.json）の読み込み

use super::{fetch_text, to_js_error};
use emote_gallery_common::{parse_catalog, parse_track_list, CatalogEntry};
use wasm_bindgen::prelude::*;

const CATALOG_URL: &str = "emotes.json";
const TRACK_LIST_URL: &str = "music-list.json";

pub async fn fetch_catalog() -> Result<Vec<CatalogEntry>, JsValue> {
    let text = fetch_text(CATALOG_URL).await?;
    parse_catalog(&text).map_err(to_js_error)
}

pub async fn fetch_track_list() -> Result<Vec<String>, JsValue> {
    let text = fetch_text(TRACK_LIST_URL).await?;
    parse_track_list(&text).map_err(to_js_error)
}
