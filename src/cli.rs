use crate::config::{BundleConfig, EntryOrder, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_FILE};
use crate::domain::extension_filter::ExtensionFilter;
use clap::Parser;
use std::path::PathBuf;

/// フォルダ内の画像を base64 に変換し、1つの JSON ファイルにまとめるツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 画像ファイルが含まれるフォルダ、またはZIPファイルのパス
    #[arg(default_value = DEFAULT_INPUT_DIR)]
    pub input: PathBuf,

    /// 出力するJSONファイルのパス (既存のファイルは上書きされます)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// 対象とする拡張子 (複数指定可。省略時は .png .jpg .jpeg .gif)
    #[arg(short = 'e', long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// ファイル名順に並べる (省略時はフォルダの列挙順)
    #[arg(long)]
    pub sort: bool,

    /// ASCII以外の文字をエスケープせずにそのまま出力する
    #[arg(long)]
    pub no_ascii_escape: bool,

    /// デバッグログを表示する
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<Args> for BundleConfig {
    fn from(args: Args) -> Self {
        let extensions = if args.extensions.is_empty() {
            ExtensionFilter::default()
        } else {
            ExtensionFilter::new(&args.extensions)
        };
        Self {
            input_dir: args.input,
            output_file: args.output,
            extensions,
            order: if args.sort {
                EntryOrder::Name
            } else {
                EntryOrder::Listing
            },
            ascii_only: !args.no_ascii_escape,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_arguments_yield_default_config() {
        let args = Args::try_parse_from(["icon_bundler"]).unwrap();
        assert!(!args.verbose);
        assert_eq!(BundleConfig::from(args), BundleConfig::default());
    }

    #[test]
    fn options_map_onto_config() {
        let args = Args::try_parse_from([
            "icon_bundler",
            "assets/icons.zip",
            "-o",
            "out/icons.json",
            "-e",
            "svg",
            "--extension",
            ".ico",
            "--sort",
            "--no-ascii-escape",
        ])
        .unwrap();
        let config = BundleConfig::from(args);

        assert_eq!(config.input_dir, PathBuf::from("assets/icons.zip"));
        assert_eq!(config.output_file, PathBuf::from("out/icons.json"));
        assert_eq!(config.extensions.suffixes(), &[".svg", ".ico"]);
        assert_eq!(config.order, EntryOrder::Name);
        assert!(!config.ascii_only);
    }
}
