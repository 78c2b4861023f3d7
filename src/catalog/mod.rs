//! カタログ再生成モジュール
//!
//! フォルダのスキャン結果と既存カタログをマージし、追加日時を決めて
//! 新しい順に並べ替えて書き戻す。既存の名前・タグ・日時は再生成しても保持される。

pub mod date;
pub mod merge;
pub mod store;
pub mod tags;

pub use date::{DateResolver, DateSource, EPOCH_FLOOR_MS};
pub use merge::{merge_entry, MergeKind, MergeOutcome};
pub use store::FsCatalog;
pub use tags::{parse_file_name, ParsedName};

use crate::error::Result;
use crate::history::{HistoryBackend, HistoryPolicy};
use crate::scanner::ScannedFile;
use emote_gallery_common::CatalogEntry;
use std::collections::{HashMap, HashSet};

/// カタログの入出力
pub trait CatalogSource {
    /// 対象フォルダの画像ファイル一覧（読めなければ致命的エラー）
    fn list_files(&self) -> Result<Vec<ScannedFile>>;

    /// 前回のカタログ（存在しない・壊れている場合は空）
    fn read_prior(&self) -> Vec<CatalogEntry>;

    fn write_catalog(&self, entries: &[CatalogEntry]) -> Result<()>;
}

/// 進捗通知
pub enum ReconcileProgress {
    /// 日時の決定を開始
    Start { total: usize },
    /// 1ファイル分の処理が完了
    Resolved { file: String },
    /// 並べ替え・書き込みまで完了
    Complete { total: usize, written: bool },
}

#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    pub policy: HistoryPolicy,
    /// 日時検証の基準時刻（エポックミリ秒）
    pub now_ms: i64,
    /// 不正な日時を警告として出力
    pub diagnostics: bool,
    /// 書き込みを行わない
    pub dry_run: bool,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            policy: HistoryPolicy::default(),
            now_ms: chrono::Utc::now().timestamp_millis(),
            diagnostics: false,
            dry_run: false,
        }
    }
}

/// 再生成結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub total: usize,
    pub added: usize,
    pub removed: usize,
    /// ファイル名のタグで作り直したエントリ数
    pub retagged: usize,
    pub written: bool,
}

impl ReconcileReport {
    pub fn is_in_sync(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

/// 追加日時の新しい順に安定ソート（未設定は0扱いで末尾）
pub fn sort_newest_first(entries: &mut [CatalogEntry]) {
    entries.sort_by(|a, b| b.added_or_zero().cmp(&a.added_or_zero()));
}

/// ファイル名キーの集合差で追加数・削除数を数える
pub fn count_changes(prior: &[CatalogEntry], scanned: &[ScannedFile]) -> (usize, usize) {
    let prior_keys: HashSet<&str> = prior.iter().map(|e| e.file.as_str()).collect();
    let scanned_keys: HashSet<&str> = scanned.iter().map(|f| f.file_name.as_str()).collect();

    let added = scanned_keys.difference(&prior_keys).count();
    let removed = prior_keys.difference(&scanned_keys).count();
    (added, removed)
}

/// カタログを再生成
pub async fn reconcile<S, H>(
    source: &S,
    history: &H,
    options: &ReconcileOptions,
    mut progress_cb: Option<&mut dyn FnMut(ReconcileProgress)>,
) -> Result<ReconcileReport>
where
    S: CatalogSource,
    H: HistoryBackend,
{
    let scanned = source.list_files()?;
    let prior = source.read_prior();

    // 同じファイル名が重複していれば後勝ち
    let prior_map: HashMap<&str, &CatalogEntry> =
        prior.iter().map(|e| (e.file.as_str(), e)).collect();

    let resolver = DateResolver::new(history, options.policy, options.now_ms)
        .with_diagnostics(options.diagnostics);

    if let Some(ref mut cb) = progress_cb {
        cb(ReconcileProgress::Start {
            total: scanned.len(),
        });
    }

    let mut entries = Vec::with_capacity(scanned.len());
    let mut retagged = 0;

    for file in &scanned {
        let existing = prior_map.get(file.file_name.as_str()).copied();
        let MergeOutcome {
            mut entry,
            preferred_date,
            kind,
        } = merge_entry(&file.file_name, existing);

        if kind == MergeKind::Retagged {
            retagged += 1;
        }

        entry.added_date = resolver.resolve(file, preferred_date).await;
        entries.push(entry);

        if let Some(ref mut cb) = progress_cb {
            cb(ReconcileProgress::Resolved {
                file: file.file_name.clone(),
            });
        }
    }

    sort_newest_first(&mut entries);

    if !options.dry_run {
        source.write_catalog(&entries)?;
    }

    if let Some(ref mut cb) = progress_cb {
        cb(ReconcileProgress::Complete {
            total: entries.len(),
            written: !options.dry_run,
        });
    }

    let (added, removed) = count_changes(&prior, &scanned);

    Ok(ReconcileReport {
        total: entries.len(),
        added,
        removed,
        retagged,
        written: !options.dry_run,
    })
}
