//! ファイルシステム上のカタログ

use super::CatalogSource;
use crate::error::Result;
use crate::output::write_json_atomic;
use crate::scanner::{scan_folder, ScannedFile, IMAGE_EXTENSIONS};
use emote_gallery_common::{parse_catalog_lenient, CatalogEntry};
use std::path::{Path, PathBuf};

/// 画像フォルダとカタログファイルの組
#[derive(Debug, Clone)]
pub struct FsCatalog {
    folder: PathBuf,
    output: PathBuf,
}

impl FsCatalog {
    pub fn new(folder: &Path, output: &Path) -> Self {
        Self {
            folder: folder.to_path_buf(),
            output: output.to_path_buf(),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

/// 前回のカタログを読み込み
///
/// 存在しない・JSON配列でない場合は空。配列内の不正なエントリは読み飛ばす。
pub fn load_prior(path: &Path) -> Vec<CatalogEntry> {
    if !path.exists() {
        return Vec::new();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read existing catalog, starting fresh");
            return Vec::new();
        }
    };

    match parse_catalog_lenient(&content) {
        Ok(catalog) => {
            if catalog.skipped > 0 {
                tracing::warn!(
                    path = %path.display(),
                    skipped = catalog.skipped,
                    "skipped malformed catalog entries"
                );
            }
            catalog.entries
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "existing catalog is invalid, starting fresh");
            Vec::new()
        }
    }
}

impl CatalogSource for FsCatalog {
    fn list_files(&self) -> Result<Vec<ScannedFile>> {
        scan_folder(&self.folder, IMAGE_EXTENSIONS)
    }

    fn read_prior(&self) -> Vec<CatalogEntry> {
        load_prior(&self.output)
    }

    fn write_catalog(&self, entries: &[CatalogEntry]) -> Result<()> {
        write_json_atomic(&self.output, entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_catalog_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_prior(&dir.path().join("emotes.json")).is_empty());
    }

    #[test]
    fn test_non_array_catalog_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emotes.json");
        std::fs::write(&path, r#"{"name": "not a list"}"#).unwrap();
        assert!(load_prior(&path).is_empty());
    }

    #[test]
    fn test_corrupted_catalog_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emotes.json");
        std::fs::write(&path, "{ invalid json").unwrap();
        assert!(load_prior(&path).is_empty());
    }

    #[test]
    fn test_valid_entries_survive_bad_neighbours() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emotes.json");
        std::fs::write(
            &path,
            r#"[{"name":"a","file":"a.png","tags":["x"]},{"oops":true}]"#,
        )
        .unwrap();

        let prior = load_prior(&path);
        assert_eq!(prior.len(), 1);
        assert_eq!(prior[0].tags, vec!["x"]);
    }
}
