use thiserror::Error;

// 入力パスの検証エラー
#[derive(Debug, Error)]
pub enum PathError {
    #[error("無効なパスです: {0}")]
    InvalidPath(String),

    #[error("処理対象外の入力です: {0}")]
    UnsupportedType(String),
}
