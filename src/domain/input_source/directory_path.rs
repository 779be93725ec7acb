use super::path_error::PathError;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// 構造体としてDirectoryPathを定義
#[derive(Debug)]
pub struct DirectoryPath {
    pub path: PathBuf,
}

impl DirectoryPath {
    // コンストラクタ: パスを受け取り、バリデーションを行う
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        // パスが存在し、かつディレクトリであることを検証
        if !path.exists() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' は存在しません。",
                path.display()
            )));
        }
        if !path.is_dir() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' はディレクトリではありません。",
                path.display()
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    // 内部のPathBufへの参照を返す
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// 直下のエントリ名を、ファイルシステムが返した順序のまま列挙する。
    ///
    /// サブディレクトリの中身には降りない。エントリ自体（ディレクトリを含む）は
    /// 名前として返すので、種類の判定は呼び出し側に任せる。
    pub fn child_names(&self) -> std::io::Result<Vec<OsString>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.path).min_depth(1).max_depth(1) {
            names.push(entry?.file_name().to_os_string());
        }
        Ok(names)
    }

    /// 直下のファイルの中身をすべて読み込む。
    pub fn read_file(&self, name: &str) -> std::io::Result<Vec<u8>> {
        // fs::read はハンドルのオープンからクローズまでを内部で完結させる
        std::fs::read(self.path.join(name))
    }
}

// Displayトレイトの実装（表示用）
impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
