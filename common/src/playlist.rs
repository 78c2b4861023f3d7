//! 音楽プレイリスト
//!
//! music-list.json（ファイル名または絶対URLの配列）を順番に再生する。
//! 末尾の次は先頭へ戻る。

use crate::error::{Error, Result};

/// ローカル曲の配置ディレクトリ
pub const MUSIC_DIR: &str = "music";

/// 初期音量（0.0〜1.0）
pub const DEFAULT_VOLUME: f64 = 0.5;

/// トラック一覧をパース
pub fn parse_track_list(json: &str) -> Result<Vec<String>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(Error::CatalogFormat("track list must be a JSON array".into()));
    }
    Ok(serde_json::from_value(value)?)
}

/// トラック参照から再生URLを解決
pub fn track_url(track: &str) -> String {
    if track.starts_with("http://") || track.starts_with("https://") {
        track.to_string()
    } else {
        format!("{}/{}", MUSIC_DIR, track)
    }
}

/// 曲を読み込むときの指示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackLoad {
    pub index: usize,
    pub url: String,
    /// 読み込み完了後に再生を開始するか
    pub autoplay: bool,
}

/// プレイリストの状態
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    tracks: Vec<String>,
    current: usize,
    /// 一度でも曲を読み込んだか
    loaded: bool,
}

impl Playlist {
    pub fn new(tracks: Vec<String>) -> Self {
        Self {
            tracks,
            current: 0,
            loaded: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_track(&self) -> Option<&str> {
        self.tracks.get(self.current).map(String::as_str)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn load(&mut self, index: usize, autoplay: bool) -> Option<TrackLoad> {
        let track = self.tracks.get(index)?;
        let load = TrackLoad {
            index,
            url: track_url(track),
            autoplay,
        };
        self.current = index;
        self.loaded = true;
        Some(load)
    }

    /// 再生ボタン押下時、まだ何も読み込んでいなければ先頭を読み込む
    pub fn start(&mut self) -> Option<TrackLoad> {
        if self.loaded {
            return None;
        }
        self.load(0, true)
    }

    /// 次の曲へ（末尾なら先頭へ）
    pub fn next(&mut self, was_playing: bool) -> Option<TrackLoad> {
        if self.tracks.is_empty() {
            return None;
        }
        let index = (self.current + 1) % self.tracks.len();
        self.load(index, was_playing)
    }

    /// 前の曲へ（先頭なら末尾へ）
    pub fn previous(&mut self, was_playing: bool) -> Option<TrackLoad> {
        if self.tracks.is_empty() {
            return None;
        }
        let len = self.tracks.len();
        let index = (self.current + len - 1) % len;
        self.load(index, was_playing)
    }

    /// 再生終了時は常に次の曲を自動再生する
    pub fn on_ended(&mut self) -> Option<TrackLoad> {
        self.next(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist() -> Playlist {
        Playlist::new(vec![
            "intro.mp3".into(),
            "https://cdn.example.com/theme.ogg".into(),
            "outro.flac".into(),
        ])
    }

    #[test]
    fn test_track_url() {
        assert_eq!(track_url("song.mp3"), "music/song.mp3");
        assert_eq!(track_url("https://a.b/c.mp3"), "https://a.b/c.mp3");
        assert_eq!(track_url("http://a.b/c.mp3"), "http://a.b/c.mp3");
    }

    #[test]
    fn test_next_wraps_around() {
        let mut list = playlist();
        assert_eq!(list.next(false).unwrap().index, 1);
        assert_eq!(list.next(false).unwrap().index, 2);
        let wrapped = list.next(true).unwrap();
        assert_eq!(wrapped.index, 0);
        assert!(wrapped.autoplay);
    }

    #[test]
    fn test_previous_wraps_around() {
        let mut list = playlist();
        let load = list.previous(false).unwrap();
        assert_eq!(load.index, 2);
        assert_eq!(load.url, "music/outro.flac");
        assert!(!load.autoplay);
    }

    #[test]
    fn test_start_only_once() {
        let mut list = playlist();
        let load = list.start().unwrap();
        assert_eq!(load.index, 0);
        assert!(load.autoplay);
        assert!(list.start().is_none());
    }

    #[test]
    fn test_on_ended_forces_play() {
        let mut list = playlist();
        list.start();
        let load = list.on_ended().unwrap();
        assert_eq!(load.index, 1);
        assert_eq!(load.url, "https://cdn.example.com/theme.ogg");
        assert!(load.autoplay);
    }

    #[test]
    fn test_empty_playlist_is_inert() {
        let mut list = Playlist::new(vec![]);
        assert!(list.start().is_none());
        assert!(list.next(true).is_none());
        assert!(list.previous(true).is_none());
        assert!(list.current_track().is_none());
    }

    #[test]
    fn test_parse_track_list() {
        let tracks = parse_track_list(r#"["a.mp3", "b.ogg"]"#).unwrap();
        assert_eq!(tracks, vec!["a.mp3", "b.ogg"]);
        assert!(parse_track_list(r#"{"a": 1}"#).is_err());
    }
}
