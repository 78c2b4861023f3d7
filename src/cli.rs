use crate::history::HistoryPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "emote-gallery", version)]
#[command(about = "エモートギャラリー用カタログ・音楽リスト生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像フォルダをスキャンしてカタログ（emotes.json）を再生成
    Emotes {
        /// 画像フォルダ（省略時は設定値）
        #[arg(short, long)]
        folder: Option<PathBuf>,

        /// 出力カタログ（省略時は設定値）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// バージョン履歴を使わず、ファイルの更新日時のみで追加日時を決める
        #[arg(long)]
        no_history: bool,

        /// ドライラン（書き込みせず結果のみ表示）
        #[arg(long)]
        dry_run: bool,
    },

    /// 音楽フォルダをスキャンして音楽リスト（music-list.json）を再生成
    Music {
        /// 音楽フォルダ（省略時は設定値）
        #[arg(short, long)]
        folder: Option<PathBuf>,

        /// 出力ファイル（省略時は設定値）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// カタログを名前・タグで検索
    Search {
        /// 検索語（大文字小文字を区別しない部分一致）
        #[arg(required = true)]
        query: String,

        /// カタログファイル（省略時は設定値）
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 履歴上の追加日時の採用方針 (oldest/newest)
        #[arg(long)]
        history_policy: Option<HistoryPolicy>,
    },
}
