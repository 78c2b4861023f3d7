//! 配信ステータスバッジ
//!
//! ステータスAPIの応答を live / offline / unknown の3状態に変換する。
//! 通信失敗は unknown として扱い、エラーにはしない。

use crate::error::{Error, Result};
use serde_json::Value;

/// ステータスAPI（`login` パラメータにチャンネル名を付ける）
pub const STATUS_ENDPOINT: &str = "https://api.ivr.fi/v2/twitch/user";

/// 定期更新の間隔
pub const STATUS_REFRESH_MS: u32 = 120_000;

/// バッジの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiveState {
    Live,
    Offline,
    #[default]
    Unknown,
}

impl LiveState {
    pub fn from_outcome(outcome: Option<bool>) -> Self {
        match outcome {
            Some(true) => LiveState::Live,
            Some(false) => LiveState::Offline,
            None => LiveState::Unknown,
        }
    }

    /// CSSクラス名
    pub fn css_class(&self) -> &'static str {
        match self {
            LiveState::Live => "is-live",
            LiveState::Offline => "is-offline",
            LiveState::Unknown => "is-unknown",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            LiveState::Live => "Twitch - Live now",
            LiveState::Offline => "Twitch - Offline",
            LiveState::Unknown => "Twitch - Status unavailable",
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self {
            LiveState::Live => "Twitch channel is live now",
            LiveState::Offline => "Twitch channel is currently offline",
            LiveState::Unknown => "Twitch channel status is unavailable",
        }
    }
}

/// JSの真偽判定に合わせた値の評価
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// ステータスAPIの応答から配信中かどうかを判定
///
/// 応答は配列で、先頭要素がユーザー情報（偽とみなされる値なら空の応答）。
/// `live_override` が指定されていれば応答の検証だけ行い、その値を返す。
pub fn parse_status_payload(payload: &Value, live_override: Option<bool>) -> Result<bool> {
    let user = payload
        .as_array()
        .and_then(|users| users.first())
        .filter(|user| is_truthy(user))
        .ok_or_else(|| Error::StatusPayload("user payload was empty".into()))?;

    if let Some(forced) = live_override {
        return Ok(forced);
    }

    Ok(user.get("stream").map(is_truthy).unwrap_or(false))
}

/// 応答の追い越しを防ぐためのリクエスト番号管理
///
/// 後から発行したリクエストの結果を適用済みなら、それより古い応答は捨てる。
#[derive(Debug, Clone, Default)]
pub struct StatusTracker {
    issued: u64,
    applied: u64,
    state: LiveState,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LiveState {
        self.state
    }

    /// リクエスト開始。戻り値の番号を完了時に渡す
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// リクエスト完了。適用した場合のみ true
    pub fn complete(&mut self, ticket: u64, outcome: Option<bool>) -> bool {
        if ticket <= self.applied || ticket > self.issued {
            return false;
        }
        self.applied = ticket;
        self.state = LiveState::from_outcome(outcome);
        true
    }
}
