//! Emote Gallery
//!
//! 画像フォルダからギャラリー用のカタログを、音楽フォルダから音楽リストを生成する。

pub mod audio;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod output;
pub mod scanner;
