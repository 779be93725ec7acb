//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! 画像から JSON への変換フローを実装します。

use crate::config::BundleConfig;
use crate::domain::icon_bundle::IconBundle;
use crate::domain::icon_source::IconSource;
use crate::domain::input_source::input_source::InputSource;
use crate::error::AppError;
use tracing::info;

// --- public な関数 ---

/// 設定に従って入力を読み込み、JSON ファイルを書き出します。
///
/// # 引数
/// * `config`: 入出力パスなどの実行設定。
///
/// # 戻り値
/// * `Ok(usize)`: 書き出したレコードの件数。
/// * `Err(AppError)`: いずれかの段階で失敗した場合。最初のエラーで中断します。
pub fn run(config: &BundleConfig) -> Result<usize, AppError> {
    // 1. 入力の検証（フォルダかZIPファイルであること）
    let source = InputSource::new(&config.input_dir)?;
    info!(
        input = %source,
        output = %config.output_file.display(),
        "変換を開始します"
    );

    // 2. 読み込み〜書き出し
    let count = bundle_into_file(&source, config)?;

    info!(
        records = count,
        output = %config.output_file.display(),
        "JSONファイルを作成しました"
    );
    Ok(count)
}

/// 任意の読み込み元からレコードを作り、設定された出力先に保存します。
///
/// 読み込みがすべて成功するまで出力ファイルには触れません。
pub fn bundle_into_file<S>(source: &S, config: &BundleConfig) -> Result<usize, AppError>
where
    S: IconSource + ?Sized,
{
    let bundle = IconBundle::collect(source, &config.extensions, config.order)?;
    bundle.write_to(&config.output_file, config.ascii_only)?;
    Ok(bundle.len())
}
