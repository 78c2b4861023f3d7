use anyhow::{Context, Result};
use clap::Parser;
use emote_gallery::catalog::{self, FsCatalog, ReconcileOptions, ReconcileProgress, ReconcileReport};
use emote_gallery::history::{GitHistory, HistoryBackend, NoHistory};
use emote_gallery::{audio, cli, config, logging};
use emote_gallery_common::{filter_entries, parse_catalog};
use cli::{Cli, Commands};
use config::Config;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    let config = Config::load().context("設定の読み込みに失敗しました")?;

    match cli.command {
        Commands::Emotes { folder, output, no_history, dry_run } => {
            println!("🖼  emote-gallery - カタログ生成\n");

            let folder = folder.unwrap_or_else(|| config.emotes_dir.clone());
            let output = output.unwrap_or_else(|| config.catalog_file.clone());
            let source = FsCatalog::new(&folder, &output);

            let options = ReconcileOptions {
                policy: config.history_policy,
                diagnostics: cli.verbose || config::is_ci(),
                dry_run,
                ..Default::default()
            };

            let report = if no_history {
                run_reconcile(&source, &NoHistory, &options).await
            } else {
                let history = GitHistory::new(source.folder(), config.history_timeout());
                run_reconcile(&source, &history, &options).await
            }
            .with_context(|| format!("カタログを生成できません: {}", folder.display()))?;

            print_report(&report, source.output());
        }

        Commands::Music { folder, output } => {
            println!("🎵 emote-gallery - 音楽リスト生成\n");

            let folder = folder.unwrap_or_else(|| config.music_dir.clone());
            let output = output.unwrap_or_else(|| config.music_list_file.clone());

            let report = audio::generate_music_list(&folder, &output)
                .with_context(|| format!("音楽リストを生成できません: {}", folder.display()))?;

            if report.written {
                println!("✅ {} を生成しました（{}曲）", output.display(), report.tracks.len());
                println!("  曲: {}", report.tracks.join(", "));
            } else {
                println!("音楽フォルダに音声ファイルがありません: {}", folder.display());
            }
        }

        Commands::Search { query, catalog } => {
            let path: PathBuf = catalog.unwrap_or_else(|| config.catalog_file.clone());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("カタログを読み込めません: {}", path.display()))?;
            let entries = parse_catalog(&content)
                .with_context(|| format!("カタログが不正です: {}", path.display()))?;

            let matches = filter_entries(&entries, &query);
            if matches.is_empty() {
                println!("「{}」に一致するエモートはありません", query);
                return Ok(());
            }

            println!("{:<24} {:<12} {:<32} タグ", "名前", "追加日", "ファイル");
            println!("{}", "-".repeat(80));
            for entry in &matches {
                println!(
                    "{:<24} {:<12} {:<32} {}",
                    entry.name,
                    format_added_date(entry.added_date),
                    entry.file,
                    entry.tags.join(", "),
                );
            }
            println!("\n{}件 / 全{}件", matches.len(), entries.len());
        }

        Commands::Config { show, history_policy } => {
            let mut config = config;

            if let Some(policy) = history_policy {
                config.set_history_policy(policy)?;
                println!("✔ 履歴の採用方針を設定しました: {}", policy);
            }

            if show || history_policy.is_none() {
                println!("設定:");
                println!("  ファイル: {}", Config::config_path()?.display());
                println!("  画像フォルダ: {}", config.emotes_dir.display());
                println!("  カタログ: {}", config.catalog_file.display());
                println!("  音楽フォルダ: {}", config.music_dir.display());
                println!("  音楽リスト: {}", config.music_list_file.display());
                println!("  履歴の採用方針: {}", config.history_policy);
                println!("  履歴タイムアウト: {}秒", config.history_timeout().as_secs());
                println!("  CI診断ログ: {}", if config::is_ci() { "有効" } else { "無効" });
            }
        }
    }

    Ok(())
}

async fn run_reconcile<H: HistoryBackend>(
    source: &FsCatalog,
    history: &H,
    options: &ReconcileOptions,
) -> Result<ReconcileReport> {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    let report = catalog::reconcile(
        source,
        history,
        options,
        Some(&mut |progress| match progress {
            ReconcileProgress::Start { total } => {
                pb.set_length(total as u64);
                pb.set_position(0);
                pb.set_message("追加日時を確認中...");
            }
            ReconcileProgress::Resolved { file } => {
                pb.inc(1);
                pb.set_message(file);
            }
            ReconcileProgress::Complete { total, .. } => {
                pb.set_position(total as u64);
                pb.set_message("完了");
            }
        }),
    )
    .await;

    pb.finish_and_clear();
    Ok(report?)
}

fn print_report(report: &ReconcileReport, output: &std::path::Path) {
    if report.written {
        println!("✅ {} を更新しました（{}件）", output.display(), report.total);
    } else {
        println!("✔ ドライラン: {} は書き換えていません（{}件）", output.display(), report.total);
    }

    if report.added > 0 {
        println!("  ➕ {}件追加", report.added);
    }
    if report.removed > 0 {
        println!("  ➖ {}件削除（フォルダに存在しないため）", report.removed);
    }
    if report.retagged > 0 {
        println!("  🏷  {}件のタグをファイル名から設定", report.retagged);
    }
    if report.is_in_sync() {
        println!("  変更なし - すべて同期済み");
    }
}

fn format_added_date(added_date: Option<i64>) -> String {
    added_date
        .and_then(chrono::DateTime::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}
