//! 画像フォルダ（またはZIPファイル）内のアイコンを base64 化し、
//! 1つの JSON ファイルにまとめるツールのライブラリ部分。

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod workflow;
