use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// 1つの画像ファイルに対応する出力レコード。
///
/// JSON には `filename`、`icon_data` の順でキーが出力される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    /// 元ファイルのベース名（パスや拡張子の加工はしない）
    pub filename: String,
    /// ファイル内容を標準 base64（パディングあり）でエンコードした文字列
    pub icon_data: String,
}

impl IconRecord {
    /// ファイル名と生のバイト列からレコードを作る。
    pub fn from_bytes(filename: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            filename: filename.into(),
            icon_data: STANDARD.encode(bytes),
        }
    }

    /// `icon_data` を元のバイト列に戻す。
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.icon_data)
    }
}
