use clap::Parser;
use icon_bundler::cli::Args;
use icon_bundler::config::BundleConfig;
use icon_bundler::logging::init_tracing;
use icon_bundler::workflow;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    // コマンドライン引数を解析します
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = BundleConfig::from(args);
    match workflow::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // 原因をさかのぼってすべて表示する
            eprintln!("エラー: {}", e);
            let mut cause = e.source();
            while let Some(inner) = cause {
                eprintln!("  原因: {}", inner);
                cause = inner.source();
            }
            ExitCode::FAILURE
        }
    }
}
