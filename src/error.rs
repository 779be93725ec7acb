use crate::domain::icon_bundle::BundleError;
use crate::domain::icon_source::SourceError;
use crate::domain::input_source::path_error::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("入力パスが不正です")]
    Path(#[from] PathError),

    #[error("画像ファイルの読み込みに失敗しました")]
    Source(#[from] SourceError),

    #[error("JSONファイルの出力に失敗しました")]
    Bundle(#[from] BundleError),
}
