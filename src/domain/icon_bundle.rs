// use宣言：必要なクレートやモジュールをスコープに取り込む

use super::extension_filter::ExtensionFilter;
use super::icon_record::IconRecord;
use super::icon_source::{IconSource, SourceError};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

/// 出力の字下げ（スペース4つ）
const INDENT: &[u8] = b"    ";

// --- 構造体定義 ---

/// エントリを処理する順序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryOrder {
    /// 読み込み元が返した順序のまま（ファイルシステムに依存する）
    #[default]
    Listing,
    /// ファイル名の昇順
    Name,
}

/// 1回の実行で作られる `IconRecord` の順序付きリスト。
#[derive(Debug, Default, PartialEq)]
pub struct IconBundle {
    records: Vec<IconRecord>,
}

// --- エラー定義 ---

/// JSON の生成・保存で発生するエラー。
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("JSONへの変換に失敗しました")]
    Serialize(#[from] serde_json::Error),

    #[error("'{}' に書き込めませんでした", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// --- 実装ブロック ---

impl IconBundle {
    pub fn new(records: Vec<IconRecord>) -> Self {
        Self { records }
    }

    /// 読み込み元から対象ファイルをすべて読み込み、レコードのリストを作る。
    ///
    /// 最初に発生したエラーでそのまま中断し、途中までの結果は返さない。
    pub fn collect<S>(
        source: &S,
        filter: &ExtensionFilter,
        order: EntryOrder,
    ) -> Result<Self, SourceError>
    where
        S: IconSource + ?Sized,
    {
        let mut names = source.entry_names()?;
        if order == EntryOrder::Name {
            names.sort();
        }

        let mut records = Vec::new();
        for name in names {
            // 判定は名前の末尾だけを見るので、不正なバイト列は置換した上で行う
            if !filter.matches(&name.to_string_lossy()) {
                trace!(file = %name.to_string_lossy(), "対象外のためスキップ");
                continue;
            }
            let file_name = name
                .to_str()
                .ok_or_else(|| SourceError::NonUtf8Name(name.clone()))?;
            let bytes = source.read(file_name)?;
            debug!(file = file_name, bytes = bytes.len(), "エンコード");
            records.push(IconRecord::from_bytes(file_name, &bytes));
        }

        Ok(Self { records })
    }

    // --- 便利メソッド ---

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[IconRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<IconRecord> {
        self.records
    }

    /// スペース4つで字下げした JSON 配列を返す。末尾に改行は付けない。
    ///
    /// `ascii_only` が真の場合、ASCII 以外の文字はすべて `\uXXXX` にエスケープする。
    pub fn to_json(&self, ascii_only: bool) -> Result<String, BundleError> {
        let mut out: Vec<u8> = Vec::new();
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut ser = Serializer::with_formatter(&mut out, formatter);
        self.records.serialize(&mut ser)?;

        // serde_json の出力は常に UTF-8
        let json = String::from_utf8_lossy(&out).into_owned();
        if ascii_only {
            Ok(escape_non_ascii(&json))
        } else {
            Ok(json)
        }
    }

    /// JSON をファイルに書き出す。既存のファイルは上書きする。
    pub fn write_to(&self, path: &Path, ascii_only: bool) -> Result<(), BundleError> {
        let json = self.to_json(ascii_only)?;
        fs::write(path, json).map_err(|source| BundleError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// ASCII 以外の文字を UTF-16 単位の `\uXXXX`（小文字16進）に置き換える。
///
/// 入力は整形済み JSON なので、非 ASCII 文字は文字列リテラルの中にしか現れない。
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for ch in json.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            let mut buf = [0u16; 2];
            for unit in ch.encode_utf16(&mut buf) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}

// --- テストモジュール ---
