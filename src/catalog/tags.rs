//! ファイル名からの名前・タグ抽出
//!
//! `Happy(joy, smile).png` → 名前 `Happy`、タグ `["joy", "smile"]`

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    /// 最初の括弧グループ（中身が1文字以上）
    static ref TAG_GROUP: Regex = Regex::new(r"\(([^)]+)\)").unwrap();
}

/// ファイル名の解析結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub name: String,
    pub tags: Vec<String>,
}

/// 拡張子を除いたファイル名
pub fn base_name(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
}

/// ファイル名から名前とタグを抽出
///
/// 括弧グループがなければタグは空、名前は拡張子を除いたファイル名のまま。
pub fn parse_file_name(file_name: &str) -> ParsedName {
    let base = base_name(file_name);

    let Some(captures) = TAG_GROUP.captures(base) else {
        return ParsedName {
            name: base.to_string(),
            tags: Vec::new(),
        };
    };

    let tags = captures[1]
        .split(',')
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect();

    let name = TAG_GROUP.replace(base, "").trim().to_string();

    ParsedName { name, tags }
}
