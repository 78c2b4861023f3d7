//! 検索フィルタ
//!
//! 名前またはいずれかのタグに対する、大文字小文字を区別しない部分一致。

use crate::catalog::CatalogEntry;

/// クエリを正規化（前後空白除去・小文字化）
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// エントリが正規化済みクエリに一致するか
///
/// 空クエリは常に一致する。
pub fn matches_normalized(entry: &CatalogEntry, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    entry.name.to_lowercase().contains(needle)
        || entry.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// エントリがクエリに一致するか
pub fn matches_query(entry: &CatalogEntry, query: &str) -> bool {
    matches_normalized(entry, &normalize_query(query))
}

/// クエリに一致するエントリを元の順序のまま抽出
pub fn filter_entries<'a>(entries: &'a [CatalogEntry], query: &str) -> Vec<&'a CatalogEntry> {
    let needle = normalize_query(query);
    entries
        .iter()
        .filter(|e| matches_normalized(e, &needle))
        .collect()
}
