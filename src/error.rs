use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("フォルダを読み込めません: {path}: {reason}")]
    FolderRead { path: String, reason: String },

    #[error("履歴の取得に失敗: {0}")]
    History(String),

    #[error("カタログの書き込みに失敗: {0}")]
    CatalogWrite(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] emote_gallery_common::Error),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
