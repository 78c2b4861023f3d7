//! git log による追加日時の取得

use super::HistoryBackend;
use crate::error::{GalleryError, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// 1回の履歴取得のデフォルトタイムアウト
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// gitリポジトリ内のフォルダを対象とする履歴バックエンド
#[derive(Debug, Clone)]
pub struct GitHistory {
    workdir: PathBuf,
    timeout: Duration,
}

impl GitHistory {
    pub fn new(workdir: &Path, timeout: Duration) -> Self {
        Self {
            workdir: workdir.to_path_buf(),
            timeout,
        }
    }
}

/// `--format=%at` の出力（1行1件のUNIX秒）をミリ秒に変換
pub(crate) fn parse_log_output(stdout: &str) -> Vec<i64> {
    stdout
        .lines()
        .filter_map(|line| line.trim().parse::<i64>().ok())
        .filter_map(|secs| secs.checked_mul(1000))
        .collect()
}

impl HistoryBackend for GitHistory {
    async fn added_timestamps(&self, file_name: &str) -> Result<Vec<i64>> {
        let mut command = Command::new("git");
        command
            .arg("-C")
            .arg(&self.workdir)
            .args(["log", "--follow", "--diff-filter=A", "--format=%at", "--"])
            .arg(file_name)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Ok(result) => {
                result.map_err(|e| GalleryError::History(format!("git実行エラー: {}", e)))?
            }
            Err(_) => {
                return Err(GalleryError::History(format!(
                    "git log がタイムアウトしました ({}秒): {}",
                    self.timeout.as_secs(),
                    file_name
                )));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GalleryError::History(format!(
                "git log が失敗しました (code {:?}): {}",
                output.status.code(),
                stderr.trim()
            )));
        }

        Ok(parse_log_output(&String::from_utf8_lossy(&output.stdout)))
    }
}
