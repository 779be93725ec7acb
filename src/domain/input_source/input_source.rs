use super::directory_path::DirectoryPath;
use super::path_error::PathError;
use super::zip_file_path::{has_zip_extension, ZipFilePath};
use std::fmt;
use std::path::Path;

/// 入力ソースを表現する列挙型。
/// ディレクトリパスまたはZIPファイルパスのいずれかを保持する。
#[derive(Debug)]
pub enum InputSource {
    Directory(DirectoryPath),
    ZipFile(ZipFilePath),
}

impl InputSource {
    /// パスの種類を判定して `InputSource` を生成する。
    ///
    /// 存在しないパスは `InvalidPath`、ディレクトリでも `.zip` でもないパスは
    /// `UnsupportedType` になる。
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();
        if path.is_dir() {
            Ok(Self::Directory(DirectoryPath::new(path)?))
        } else if path.is_file() && has_zip_extension(path) {
            Ok(Self::ZipFile(ZipFilePath::new(path)?))
        } else if path.exists() {
            Err(PathError::UnsupportedType(path.display().to_string()))
        } else {
            Err(PathError::InvalidPath(format!(
                "パス '{}' は存在しません。",
                path.display()
            )))
        }
    }

    pub fn as_path(&self) -> &Path {
        match self {
            Self::Directory(dir) => dir.as_path(),
            Self::ZipFile(zip) => zip.as_path(),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(dir) => write!(f, "{}", dir),
            Self::ZipFile(zip) => write!(f, "{}", zip),
        }
    }
}
