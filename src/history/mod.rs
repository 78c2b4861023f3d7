//! バージョン履歴（ファイルが追加された日時）の取得
//!
//! 履歴が取れない場合（リポジトリ外・未追跡・タイムアウト等）は
//! 呼び出し側でファイルシステムの日時へフォールバックする。

mod git;

pub use git::{GitHistory, DEFAULT_TIMEOUT};

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// 履歴バックエンド
#[allow(async_fn_in_trait)]
pub trait HistoryBackend {
    /// ファイルが追加された全イベントの日時（エポックミリ秒）
    ///
    /// 改名前のパスでの追加イベントも含む。
    async fn added_timestamps(&self, file_name: &str) -> Result<Vec<i64>>;
}

/// 履歴なし（`--no-history` 指定時）
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl HistoryBackend for NoHistory {
    async fn added_timestamps(&self, _file_name: &str) -> Result<Vec<i64>> {
        Ok(Vec::new())
    }
}

/// 複数の追加イベントからどれを採用するか
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryPolicy {
    /// 最初の追加（本当の作成日）
    #[default]
    Oldest,
    /// 最後の追加
    Newest,
}

impl HistoryPolicy {
    pub fn pick(&self, timestamps: &[i64]) -> Option<i64> {
        match self {
            HistoryPolicy::Oldest => timestamps.iter().copied().min(),
            HistoryPolicy::Newest => timestamps.iter().copied().max(),
        }
    }
}

impl std::str::FromStr for HistoryPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "oldest" | "first" => Ok(HistoryPolicy::Oldest),
            "newest" | "latest" => Ok(HistoryPolicy::Newest),
            _ => Err(format!("Unknown history policy: {}. Use oldest or newest", s)),
        }
    }
}

impl std::fmt::Display for HistoryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryPolicy::Oldest => write!(f, "oldest"),
            HistoryPolicy::Newest => write!(f, "newest"),
        }
    }
}
