//! JSON成果物のアトミック書き込み
//!
//! 同じディレクトリの一時ファイルに書いてから置き換えるため、
//! 書き込み失敗時も前回のファイルは壊れない。

use crate::error::{GalleryError, Result};
use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let write_error = |e: std::io::Error| GalleryError::CatalogWrite(format!("{}: {}", path.display(), e));

    let mut tmp = NamedTempFile::new_in(parent).map_err(write_error)?;
    {
        let mut writer = BufWriter::new(&mut tmp);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush().map_err(write_error)?;
    }

    // 一時ファイルは0600で作られるため、既存ファイルの権限を引き継ぐ
    match fs::metadata(path) {
        Ok(meta) => tmp.as_file().set_permissions(meta.permissions()).map_err(write_error)?,
        Err(_) => set_default_permissions(tmp.as_file()).map_err(write_error)?,
    }

    tmp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

#[cfg(unix)]
fn set_default_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}
