//! ログ出力の初期化

use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` が設定されていればそれを優先する
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "warn,emote_gallery=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
