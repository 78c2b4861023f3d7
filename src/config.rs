use crate::error::{GalleryError, Result};
use crate::history::{HistoryPolicy, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// `~/.config/emote-gallery/config.json` に保存される設定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub emotes_dir: PathBuf,
    pub catalog_file: PathBuf,
    pub music_dir: PathBuf,
    pub music_list_file: PathBuf,
    pub history_policy: HistoryPolicy,
    pub history_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            emotes_dir: PathBuf::from("emotes"),
            catalog_file: PathBuf::from("emotes.json"),
            music_dir: PathBuf::from("music"),
            music_list_file: PathBuf::from("music-list.json"),
            history_policy: HistoryPolicy::Oldest,
            history_timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GalleryError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("emote-gallery").join("config.json"))
    }

    pub fn history_timeout(&self) -> Duration {
        Duration::from_secs(self.history_timeout_seconds.max(1))
    }

    pub fn set_history_policy(&mut self, policy: HistoryPolicy) -> Result<()> {
        self.history_policy = policy;
        self.save()
    }
}

/// CI環境で実行されているか（`CI` 環境変数）
pub fn is_ci() -> bool {
    ci_flag(std::env::var("CI").ok().as_deref())
}

fn ci_flag(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") => false,
        Some(v) => !(v.eq_ignore_ascii_case("false") || v == "0"),
    }
}
