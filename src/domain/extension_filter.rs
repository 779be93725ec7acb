/// 既定で対象とする拡張子。
pub const DEFAULT_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".gif"];

/// ファイル名の末尾で対象ファイルを判定するフィルタ。
///
/// 判定は大文字小文字を区別する単純な末尾一致で、`icon.PNG` は `.png` に一致しない。
/// ファイル名だけを見るため、エントリがファイルかどうかは判定しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    /// 拡張子のリストからフィルタを作る。
    ///
    /// 先頭に `.` が無いものには補い、空文字列は無視する。
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut suffixes: Vec<String> = Vec::new();
        for ext in extensions {
            let ext = ext.as_ref().trim();
            if ext.is_empty() {
                continue;
            }
            let suffix = if ext.starts_with('.') {
                ext.to_string()
            } else {
                format!(".{}", ext)
            };
            if !suffixes.contains(&suffix) {
                suffixes.push(suffix);
            }
        }
        Self { suffixes }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.suffixes
            .iter()
            .any(|suffix| file_name.ends_with(suffix.as_str()))
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}
