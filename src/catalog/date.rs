//! 追加日時の決定
//!
//! 候補を順番に試し、最初に有効だった値を採用する:
//! 1. 既存カタログの値
//! 2. バージョン履歴の追加日時
//! 3. ファイルの最終更新日時（最終手段のため検証しない）

use crate::history::{HistoryBackend, HistoryPolicy};
use crate::scanner::ScannedFile;

/// これより前の日時は不正とみなす（2000-01-01T00:00:00Z）
pub const EPOCH_FLOOR_MS: i64 = 946_684_800_000;

/// 日時の取得元
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    Existing,
    History,
    Modified,
}

impl DateSource {
    /// 試す順序
    pub const CHAIN: [DateSource; 3] = [DateSource::Existing, DateSource::History, DateSource::Modified];

    /// 取得した値を検証するか
    pub fn is_validated(&self) -> bool {
        !matches!(self, DateSource::Modified)
    }
}

/// 未来でも下限より前でもない
pub fn is_valid_date(timestamp: i64, now_ms: i64) -> bool {
    (EPOCH_FLOOR_MS..=now_ms).contains(&timestamp)
}

pub struct DateResolver<'a, H> {
    history: &'a H,
    policy: HistoryPolicy,
    now_ms: i64,
    diagnostics: bool,
}

impl<'a, H: HistoryBackend> DateResolver<'a, H> {
    pub fn new(history: &'a H, policy: HistoryPolicy, now_ms: i64) -> Self {
        Self {
            history,
            policy,
            now_ms,
            diagnostics: false,
        }
    }

    /// 不正な日時を警告として出力する（CI環境など）
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    pub fn is_valid(&self, timestamp: i64) -> bool {
        is_valid_date(timestamp, self.now_ms)
    }

    /// `existing` が有効ならそれを優先し、なければ再計算する
    pub async fn resolve(&self, file: &ScannedFile, existing: Option<i64>) -> Option<i64> {
        for source in DateSource::CHAIN {
            let candidate = match source {
                DateSource::Existing => existing,
                DateSource::History => self.from_history(&file.file_name).await,
                DateSource::Modified => file.modified_ms,
            };

            let Some(timestamp) = candidate else {
                continue;
            };

            if !source.is_validated() || self.is_valid(timestamp) {
                return Some(timestamp);
            }
            self.report_rejected(&file.file_name, source, timestamp);
        }
        None
    }

    async fn from_history(&self, file_name: &str) -> Option<i64> {
        match self.history.added_timestamps(file_name).await {
            Ok(timestamps) => self.policy.pick(&timestamps),
            Err(e) => {
                tracing::debug!(file = file_name, error = %e, "history lookup failed");
                None
            }
        }
    }

    fn report_rejected(&self, file_name: &str, source: DateSource, timestamp: i64) {
        if self.diagnostics {
            tracing::warn!(
                file = file_name,
                source = ?source,
                timestamp,
                now = self.now_ms,
                "rejected invalid added date"
            );
        } else {
            tracing::debug!(file = file_name, source = ?source, timestamp, "rejected invalid added date");
        }
    }
}
