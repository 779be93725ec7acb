use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// 標準エラー出力へのログ出力を初期化する。
///
/// `RUST_LOG` が設定されていればそれを優先し、無ければ `info`（`verbose` 時は `debug`）。
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    // 二重に初期化された場合（テストなど）は既存の設定を使う
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
