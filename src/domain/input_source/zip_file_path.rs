use super::path_error::PathError;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use zip::result::ZipResult;
use zip::ZipArchive;

/// ZIPファイルへのパスを表現し、その妥当性を保証する構造体。
#[derive(Debug)]
pub struct ZipFilePath(PathBuf);

impl ZipFilePath {
    // --- Public Methods ---

    /// 新しい `ZipFilePath` インスタンスを生成する。
    ///
    /// パスが存在し、ファイルであり、かつ拡張子が `.zip` であることを検証する。
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' は存在しません。",
                path.display()
            )));
        }
        if !path.is_file() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' はファイルではありません。",
                path.display()
            )));
        }
        if !has_zip_extension(path) {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' は.zipファイルではありません。",
                path.display()
            )));
        }
        Ok(Self(path.to_path_buf()))
    }

    /// 内部の `Path` への参照を返す。
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// アーカイブ直下のファイルエントリ名を、アーカイブ内の格納順で返す。
    ///
    /// ディレクトリエントリと、サブフォルダ内のエントリ（名前に `/` を含むもの）は除外する。
    pub fn top_level_file_names(&self) -> ZipResult<Vec<String>> {
        let mut archive = self.open_archive()?;
        let mut names = Vec::new();
        for i in 0..archive.len() {
            let entry = archive.by_index(i)?;
            if entry.is_dir() || entry.name().contains('/') {
                continue;
            }
            names.push(entry.name().to_string());
        }
        Ok(names)
    }

    /// 指定したエントリの中身をバイト列で返す。
    pub fn read_entry(&self, name: &str) -> ZipResult<Vec<u8>> {
        let mut archive = self.open_archive()?;
        let mut entry = archive.by_name(name)?;
        let mut buffer = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut buffer)?;
        Ok(buffer)
    }

    // --- Private Helper Methods ---

    /// ZIPファイルを開き、ZipArchiveを生成する。
    fn open_archive(&self) -> ZipResult<ZipArchive<File>> {
        let file = File::open(&self.0)?;
        ZipArchive::new(file)
    }
}

/// 拡張子が `.zip` かどうか（ディレクトリ判定と同様、大文字小文字は区別する）。
pub(crate) fn has_zip_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("zip")
}

// Displayトレイトの実装（表示用）
impl fmt::Display for ZipFilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
