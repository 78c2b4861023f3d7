//! 音楽リスト（music-list.json）の生成
//!
//! 既存リストとのマージは行わず、毎回フォルダから作り直す。

use crate::error::Result;
use crate::output::write_json_atomic;
use crate::scanner::{scan_folder, AUDIO_EXTENSIONS};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MusicListReport {
    pub tracks: Vec<String>,
    /// 曲が1つもない場合は書き込まない
    pub written: bool,
}

pub fn generate_music_list(folder: &Path, output: &Path) -> Result<MusicListReport> {
    let tracks: Vec<String> = scan_folder(folder, AUDIO_EXTENSIONS)?
        .into_iter()
        .map(|f| f.file_name)
        .collect();

    if tracks.is_empty() {
        return Ok(MusicListReport {
            tracks,
            written: false,
        });
    }

    write_json_atomic(output, &tracks)?;

    Ok(MusicListReport {
        tracks,
        written: true,
    })
}
