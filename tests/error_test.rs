//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use emote_gallery::error::GalleryError;
use emote_gallery::scanner::{self, AUDIO_EXTENSIONS, IMAGE_EXTENSIONS};
use std::path::Path;
use tempfile::tempdir;

/// 存在しないフォルダをスキャンした場合
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"), IMAGE_EXTENSIONS);
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, GalleryError::FolderNotFound(_)));
}

/// フォルダではなくファイルを指定した場合
#[test]
fn test_scan_file_instead_of_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let file = dir.path().join("emote.png");
    std::fs::write(&file, b"png").unwrap();

    let result = scanner::scan_folder(&file, IMAGE_EXTENSIONS);
    assert!(matches!(result, Err(GalleryError::FolderRead { .. })));
}

/// 空のフォルダをスキャンした場合
#[test]
fn test_scan_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::scan_folder(dir.path(), IMAGE_EXTENSIONS);

    // 空フォルダはエラーではなく空のVecを返す
    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

/// 対象拡張子のないフォルダをスキャンした場合
#[test]
fn test_scan_folder_without_matches() {
    let dir = tempdir().expect("Failed to create temp dir");

    std::fs::write(dir.path().join("test.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("data.json"), "{}").unwrap();

    assert!(scanner::scan_folder(dir.path(), IMAGE_EXTENSIONS).unwrap().is_empty());
    assert!(scanner::scan_folder(dir.path(), AUDIO_EXTENSIONS).unwrap().is_empty());
}

/// GalleryErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        GalleryError::Config("テスト設定エラー".to_string()),
        GalleryError::FolderNotFound("/path/to/folder".to_string()),
        GalleryError::FolderRead {
            path: "emotes".to_string(),
            reason: "permission denied".to_string(),
        },
        GalleryError::History("git log失敗".to_string()),
        GalleryError::CatalogWrite("emotes.json".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// FolderReadのメッセージにパスと理由が含まれる
#[test]
fn test_folder_read_message() {
    let err = GalleryError::FolderRead {
        path: "emotes".to_string(),
        reason: "permission denied".to_string(),
    };
    let display = format!("{}", err);

    assert!(display.contains("emotes"));
    assert!(display.contains("permission denied"));
}

/// エラーのDebug実装確認
#[test]
fn test_error_debug() {
    let err = GalleryError::Config("テスト".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("テスト"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: GalleryError = io_err.into();

    assert!(matches!(err, GalleryError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: GalleryError = json_err.into();

    assert!(matches!(err, GalleryError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = emote_gallery_common::Error::CatalogFormat("配列ではありません".to_string());
    let err: GalleryError = common_err.into();

    assert!(matches!(err, GalleryError::Common(_)));
    // 透過的エラーなのでメッセージがそのまま表示される
    assert!(format!("{}", err).contains("配列ではありません"));
}
