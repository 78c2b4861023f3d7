//! カタログ（emotes.json）の型定義
//!
//! CLI（生成側）とWeb(WASM)（表示側）で共有される。

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// カタログの1エントリ（画像ファイル1つに対応）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// 表示名（手編集で消されていれば空）
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,

    /// ファイル名（カタログ内で一意）
    pub file: String,

    /// 検索用タグ（小文字）
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,

    /// 追加日時（エポックミリ秒）。読めない値は未設定として再計算させる
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub added_date: Option<i64>,

    /// 手編集で追加された未知のフィールド
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, file: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            tags,
            ..Default::default()
        }
    }

    /// 並び替え用の日時（未設定は0）
    pub fn added_or_zero(&self) -> i64 {
        self.added_date.unwrap_or(0)
    }
}

// 手編集されたファイルを読むため、`file` 以外のフィールドは型が違っても失敗させない

fn lenient_name<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(name) => name,
        _ => String::new(),
    })
}

/// null・配列以外は空、配列内の文字列以外は捨てる
fn lenient_tags<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// 整数、または小数部のない浮動小数点数（`1700000000000.0`）を受け付ける
fn lenient_timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => integral_millis(&number),
        _ => None,
    })
}

fn integral_millis(number: &serde_json::Number) -> Option<i64> {
    if let Some(ms) = number.as_i64() {
        return Some(ms);
    }
    let ms = number.as_f64()?;
    // i64::MAX は f64 で正確に表せないため上限は 2^63 未満で判定
    if ms.is_finite() && ms.fract() == 0.0 && ms >= i64::MIN as f64 && ms < i64::MAX as f64 {
        Some(ms as i64)
    } else {
        None
    }
}

/// カタログをパース（配列以外・不正エントリはエラー）
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogEntry>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(Error::CatalogFormat("catalog must be a JSON array".into()));
    }
    Ok(serde_json::from_value(value)?)
}

/// 寛容なパース結果
#[derive(Debug, Default)]
pub struct LenientCatalog {
    pub entries: Vec<CatalogEntry>,
    /// 読み飛ばした不正エントリ数
    pub skipped: usize,
}

/// カタログを寛容にパース
///
/// 全体が配列でなければエラー。文字列の `file` を持たない要素だけを読み飛ばして数え、
/// それ以外のフィールドの不正値は既定値として読み込む。
pub fn parse_catalog_lenient(json: &str) -> Result<LenientCatalog> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        _ => return Err(Error::CatalogFormat("catalog must be a JSON array".into())),
    };

    let mut catalog = LenientCatalog::default();
    for item in items {
        match serde_json::from_value::<CatalogEntry>(item) {
            Ok(entry) => catalog.entries.push(entry),
            Err(_) => catalog.skipped += 1,
        }
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_field_order_and_case() {
        let mut entry = CatalogEntry::new("Happy", "Happy(joy).png", vec!["joy".into()]);
        entry.added_date = Some(1_700_000_000_000);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Happy","file":"Happy(joy).png","tags":["joy"],"addedDate":1700000000000}"#
        );
    }

    #[test]
    fn test_missing_date_is_omitted() {
        let entry = CatalogEntry::new("a", "a.png", vec![]);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("addedDate"));
    }

    #[test]
    fn test_null_and_missing_tags_become_empty() {
        let parsed = parse_catalog(r#"[{"name":"a","file":"a.png","tags":null},{"name":"b","file":"b.png"}]"#)
            .unwrap();
        assert!(parsed[0].tags.is_empty());
        assert!(parsed[1].tags.is_empty());
    }

    #[test]
    fn test_extra_fields_survive() {
        let parsed = parse_catalog(r#"[{"name":"a","file":"a.png","tags":[],"artist":"someone"}]"#).unwrap();
        assert_eq!(parsed[0].extra.get("artist").and_then(|v| v.as_str()), Some("someone"));

        let json = serde_json::to_string(&parsed[0]).unwrap();
        assert!(json.contains(r#""artist":"someone""#));
    }

    #[test]
    fn test_parse_catalog_rejects_object() {
        let result = parse_catalog(r#"{"name":"a"}"#);
        assert!(matches!(result, Err(Error::CatalogFormat(_))));
    }

    #[test]
    fn test_lenient_skips_only_entries_without_file() {
        let json = r#"[
            {"name":"ok","file":"ok.png","tags":["x"],"addedDate":5},
            {"name":"nofile","tags":["y"]},
            {"name":"numeric","file":7},
            42
        ]"#;
        let catalog = parse_catalog_lenient(json).unwrap();
        assert_eq!(catalog.entries.len(), 1);
        assert_eq!(catalog.entries[0].file, "ok.png");
        assert_eq!(catalog.skipped, 3);
    }

    #[test]
    fn test_missing_name_keeps_entry() {
        let catalog = parse_catalog_lenient(r#"[{"file":"cat.png","tags":["foo"],"addedDate":1700000000000}]"#)
            .unwrap();
        assert_eq!(catalog.skipped, 0);
        assert_eq!(catalog.entries[0].name, "");
        assert_eq!(catalog.entries[0].tags, vec!["foo"]);
        assert_eq!(catalog.entries[0].added_date, Some(1_700_000_000_000));
    }

    #[test]
    fn test_float_date_is_read_as_integer() {
        let catalog = parse_catalog_lenient(
            r#"[{"name":"My Cat","file":"cat.png","tags":["foo"],"addedDate":1700000000000.0}]"#,
        )
        .unwrap();
        assert_eq!(catalog.entries[0].name, "My Cat");
        assert_eq!(catalog.entries[0].added_date, Some(1_700_000_000_000));
    }

    #[test]
    fn test_unreadable_date_becomes_unset() {
        let json = r#"[
            {"name":"a","file":"a.png","addedDate":"yesterday"},
            {"name":"b","file":"b.png","addedDate":1700000000000.5},
            {"name":"c","file":"c.png","addedDate":null}
        ]"#;
        let catalog = parse_catalog_lenient(json).unwrap();
        assert_eq!(catalog.skipped, 0);
        assert!(catalog.entries.iter().all(|e| e.added_date.is_none()));
    }

    #[test]
    fn test_odd_tags_are_tolerated() {
        let json = r#"[
            {"name":"a","file":"a.png","tags":"joy"},
            {"name":"b","file":"b.png","tags":["joy", 3, null, "smile"]}
        ]"#;
        let catalog = parse_catalog_lenient(json).unwrap();
        assert!(catalog.entries[0].tags.is_empty());
        assert_eq!(catalog.entries[1].tags, vec!["joy", "smile"]);
    }

    #[test]
    fn test_added_or_zero() {
        let mut entry = CatalogEntry::new("a", "a.png", vec![]);
        assert_eq!(entry.added_or_zero(), 0);
        entry.added_date = Some(300);
        assert_eq!(entry.added_or_zero(), 300);
    }
}
