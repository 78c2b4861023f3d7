//! フォルダスキャン
//!
//! 直下のファイルのみを対象に、拡張子（大文字小文字を区別しない）で絞り込む。

use crate::error::{GalleryError, Result};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use walkdir::WalkDir;

/// スキャンで見つかったファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub file_name: String,
    /// 最終更新日時（エポックミリ秒）
    pub modified_ms: Option<i64>,
}

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg"];

pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "ogg", "wav", "m4a", "aac", "flac"];

/// 対象拡張子か判定
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map(|ext| extensions.iter().any(|&e| e == ext))
        .unwrap_or(false)
}

pub fn system_time_to_ms(time: SystemTime) -> Option<i64> {
    time.duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|d| i64::try_from(d.as_millis()).ok())
}

pub fn scan_folder(folder: &Path, extensions: &[&str]) -> Result<Vec<ScannedFile>> {
    if !folder.exists() {
        return Err(GalleryError::FolderNotFound(folder.display().to_string()));
    }
    if !folder.is_dir() {
        return Err(GalleryError::FolderRead {
            path: folder.display().to_string(),
            reason: "ディレクトリではありません".into(),
        });
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(folder).max_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            // フォルダ自体が読めない場合は致命的
            Err(e) if e.depth() == 0 => {
                return Err(GalleryError::FolderRead {
                    path: folder.display().to_string(),
                    reason: e.to_string(),
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() || !has_extension(path, extensions) {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let modified_ms = entry
            .metadata()
            .ok()
            .and_then(|m| m.modified().ok())
            .and_then(system_time_to_ms);

        files.push(ScannedFile {
            path: path.to_path_buf(),
            file_name,
            modified_ms,
        });
    }

    // ファイル名でソート（後段の安定ソートの順序を決定的にする）
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    #[test]
    fn test_has_extension() {
        assert!(has_extension(Path::new("a.png"), IMAGE_EXTENSIONS));
        assert!(has_extension(Path::new("a.JPG"), IMAGE_EXTENSIONS));
        assert!(has_extension(Path::new("a.Webp"), IMAGE_EXTENSIONS));
        assert!(has_extension(Path::new("x.svg"), IMAGE_EXTENSIONS));
        assert!(!has_extension(Path::new("a.txt"), IMAGE_EXTENSIONS));
        assert!(!has_extension(Path::new("png"), IMAGE_EXTENSIONS));
        assert!(has_extension(Path::new("song.FLAC"), AUDIO_EXTENSIONS));
        assert!(!has_extension(Path::new("song.mp4"), AUDIO_EXTENSIONS));
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"), IMAGE_EXTENSIONS);
        assert!(matches!(result, Err(GalleryError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_file_instead_of_folder() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("emotes");
        fs::write(&file, b"not a dir").unwrap();

        let result = scan_folder(&file, IMAGE_EXTENSIONS);
        assert!(matches!(result, Err(GalleryError::FolderRead { .. })));
    }

    #[test]
    fn test_scan_folder_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();

        File::create(dir.path().join("c.gif")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("a.PNG")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("b(joy).webp")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("readme.txt")).unwrap().write_all(b"text").unwrap();
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let result = scan_folder(dir.path(), IMAGE_EXTENSIONS).unwrap();
        let names: Vec<_> = result.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.PNG", "b(joy).webp", "c.gif"]);
        assert!(result.iter().all(|f| f.modified_ms.is_some()));
    }

    #[test]
    fn test_scan_does_not_recurse() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("sub").join("deep.png")).unwrap();

        let result = scan_folder(dir.path(), IMAGE_EXTENSIONS).unwrap();
        assert!(result.is_empty());
    }
}
