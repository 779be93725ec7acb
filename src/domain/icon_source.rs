//! アイコンの読み込み元を抽象化するモジュール。
//!
//! 束ねる処理（`IconBundle::collect`）は `IconSource` トレイトだけに依存するので、
//! 実ファイルシステム、ZIPアーカイブ、メモリ上のデータを同じ手順で扱える。

use super::input_source::directory_path::DirectoryPath;
use super::input_source::input_source::InputSource;
use super::input_source::zip_file_path::ZipFilePath;
use std::ffi::OsString;
use std::io;
use thiserror::Error;
use zip::result::ZipError;

/// 読み込み元で発生するエラー。どれも発生した時点で実行全体を中断する。
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("'{location}' の一覧を取得できませんでした")]
    Listing {
        location: String,
        #[source]
        source: io::Error,
    },

    #[error("ファイル '{name}' を読み込めませんでした")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("ZIPアーカイブ '{location}' を扱えませんでした")]
    Archive {
        location: String,
        #[source]
        source: ZipError,
    },

    #[error("ファイル名がUTF-8ではありません: {0:?}")]
    NonUtf8Name(OsString),
}

/// ファイル名の列挙と、名前を指定した読み込みを提供する読み込み元。
pub trait IconSource {
    /// 直下のエントリ名を、読み込み元が返す順序のまま返す。
    fn entry_names(&self) -> Result<Vec<OsString>, SourceError>;

    /// 指定したエントリの中身をすべて読み込む。
    fn read(&self, name: &str) -> Result<Vec<u8>, SourceError>;
}

impl IconSource for DirectoryPath {
    fn entry_names(&self) -> Result<Vec<OsString>, SourceError> {
        self.child_names().map_err(|source| SourceError::Listing {
            location: self.to_string(),
            source,
        })
    }

    fn read(&self, name: &str) -> Result<Vec<u8>, SourceError> {
        self.read_file(name).map_err(|source| SourceError::Read {
            name: name.to_string(),
            source,
        })
    }
}

impl IconSource for ZipFilePath {
    fn entry_names(&self) -> Result<Vec<OsString>, SourceError> {
        let names = self
            .top_level_file_names()
            .map_err(|source| SourceError::Archive {
                location: self.to_string(),
                source,
            })?;
        Ok(names.into_iter().map(OsString::from).collect())
    }

    fn read(&self, name: &str) -> Result<Vec<u8>, SourceError> {
        self.read_entry(name).map_err(|source| match source {
            // エントリ本体の読み取り失敗は通常のファイル読み込みエラーとして扱う
            ZipError::Io(source) => SourceError::Read {
                name: name.to_string(),
                source,
            },
            source => SourceError::Archive {
                location: format!("{}:{}", self, name),
                source,
            },
        })
    }
}

impl IconSource for InputSource {
    fn entry_names(&self) -> Result<Vec<OsString>, SourceError> {
        match self {
            InputSource::Directory(dir) => IconSource::entry_names(dir),
            InputSource::ZipFile(zip) => IconSource::entry_names(zip),
        }
    }

    fn read(&self, name: &str) -> Result<Vec<u8>, SourceError> {
        match self {
            InputSource::Directory(dir) => IconSource::read(dir, name),
            InputSource::ZipFile(zip) => IconSource::read(zip, name),
        }
    }
}

/// メモリ上のエントリを読み込み元として扱う実装。
///
/// ファイルシステムを使わずに束ねる処理を検証するためのもの。
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    // 中身が None のエントリは読み込みに失敗する
    entries: Vec<(OsString, Option<Vec<u8>>)>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, name: impl Into<OsString>, bytes: impl Into<Vec<u8>>) -> Self {
        self.entries.push((name.into(), Some(bytes.into())));
        self
    }

    /// 列挙はされるが読み込めないエントリを追加する。
    pub fn with_unreadable(mut self, name: impl Into<OsString>) -> Self {
        self.entries.push((name.into(), None));
        self
    }
}

impl IconSource for MemorySource {
    fn entry_names(&self) -> Result<Vec<OsString>, SourceError> {
        Ok(self.entries.iter().map(|(name, _)| name.clone()).collect())
    }

    fn read(&self, name: &str) -> Result<Vec<u8>, SourceError> {
        let entry = self.entries.iter().find(|(n, _)| n.as_os_str() == name);
        match entry {
            Some((_, Some(bytes))) => Ok(bytes.clone()),
            Some((_, None)) => Err(SourceError::Read {
                name: name.to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "unreadable entry"),
            }),
            None => Err(SourceError::Read {
                name: name.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such entry"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::input_source::zip_file_path::tests::create_temp_zip;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn directory_source_reads_files_by_name() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.png"), [1u8, 2, 3]).unwrap();
        let source = InputSource::new(dir.path()).unwrap();

        assert_eq!(source.entry_names().unwrap(), vec![OsString::from("a.png")]);
        assert_eq!(source.read("a.png").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn directory_source_read_error_names_the_file() {
        let dir = tempdir().unwrap();
        let source = InputSource::new(dir.path()).unwrap();

        match source.read("gone.png") {
            Err(SourceError::Read { name, source }) => {
                assert_eq!(name, "gone.png");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("予期せぬ結果: {:?}", other),
        }
    }

    #[test]
    fn zip_source_lists_in_archive_order() {
        let (_dir, zip_path) = create_temp_zip(&[("z.png", b"z"), ("a.png", b"a")]);
        let source = InputSource::new(&zip_path).unwrap();

        assert_eq!(
            source.entry_names().unwrap(),
            vec![OsString::from("z.png"), OsString::from("a.png")]
        );
        assert_eq!(source.read("a.png").unwrap(), b"a");
    }

    #[test]
    fn zip_source_missing_entry_is_archive_error() {
        let (_dir, zip_path) = create_temp_zip(&[("a.png", b"a")]);
        let source = InputSource::new(&zip_path).unwrap();
        assert!(matches!(
            source.read("b.png"),
            Err(SourceError::Archive { .. })
        ));
    }

    #[test]
    fn memory_source_keeps_insertion_order_and_failures() {
        let source = MemorySource::new()
            .with_entry("b.png", vec![2u8])
            .with_unreadable("broken.gif")
            .with_entry("a.png", vec![1u8]);

        assert_eq!(
            source.entry_names().unwrap(),
            vec![
                OsString::from("b.png"),
                OsString::from("broken.gif"),
                OsString::from("a.png")
            ]
        );
        assert_eq!(source.read("a.png").unwrap(), vec![1]);
        assert!(matches!(
            source.read("broken.gif"),
            Err(SourceError::Read { .. })
        ));
    }
}
