//! 実行時の設定。
//!
//! 入出力パスや対象拡張子を定数ではなく `BundleConfig` として受け渡す。

use crate::domain::extension_filter::ExtensionFilter;
use std::path::PathBuf;

pub use crate::domain::icon_bundle::EntryOrder;

/// 既定の入力フォルダ
pub const DEFAULT_INPUT_DIR: &str = "icons";
/// 既定の出力ファイル（カレントディレクトリに作られる）
pub const DEFAULT_OUTPUT_FILE: &str = "converted_icons.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleConfig {
    /// 画像を含むフォルダ、またはZIPファイル
    pub input_dir: PathBuf,
    pub output_file: PathBuf,
    pub extensions: ExtensionFilter,
    pub order: EntryOrder,
    /// 非 ASCII 文字を `\uXXXX` にエスケープするかどうか
    pub ascii_only: bool,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            extensions: ExtensionFilter::default(),
            order: EntryOrder::Listing,
            ascii_only: true,
        }
    }
}
