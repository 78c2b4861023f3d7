//! スキャン結果と既存カタログのマージ規則
//!
//! - 新規ファイル: ファイル名から名前・タグを作る
//! - 既存エントリにタグがなく、ファイル名にタグがある: 名前・タグを作り直す
//! - それ以外: 既存エントリをそのまま残す（手編集を保持）
//!
//! いずれの場合も追加日時は既存値を優先して別途決定する。

use super::tags::parse_file_name;
use emote_gallery_common::CatalogEntry;

/// マージの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeKind {
    New,
    Retagged,
    Kept,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// 追加日時は未決定（`preferred_date` を元に決める）
    pub entry: CatalogEntry,
    /// 優先すべき既存の追加日時
    pub preferred_date: Option<i64>,
    pub kind: MergeKind,
}

pub fn merge_entry(file_name: &str, existing: Option<&CatalogEntry>) -> MergeOutcome {
    let parsed = parse_file_name(file_name);

    match existing {
        None => MergeOutcome {
            entry: CatalogEntry::new(parsed.name, file_name, parsed.tags),
            preferred_date: None,
            kind: MergeKind::New,
        },
        Some(existing) if !parsed.tags.is_empty() && existing.tags.is_empty() => MergeOutcome {
            entry: CatalogEntry::new(parsed.name, file_name, parsed.tags),
            preferred_date: existing.added_date,
            kind: MergeKind::Retagged,
        },
        Some(existing) => MergeOutcome {
            entry: existing.clone(),
            preferred_date: existing.added_date,
            kind: MergeKind::Kept,
        },
    }
}
