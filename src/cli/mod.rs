//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! 无子命令：不带任何参数运行时，重命名当前目录下的文件并跳过 `.py` 文件。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use clap::Parser;
use std::path::PathBuf;

/// 默认跳过的脚本扩展名
pub const DEFAULT_SKIP_EXT: &str = ".py";

/// renumber - 目录文件顺序重命名工具
#[derive(Parser, Debug)]
#[command(name = "renumber")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Rename every file in a directory to number<index><ext> by sorted name",
    long_about = None
)]
pub struct Cli {
    /// Directory whose files are renamed
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Skip files with this exact extension, leading dot included (repeatable)
    #[arg(long = "skip-ext", value_name = "EXT", default_values_t = [DEFAULT_SKIP_EXT.to_string()])]
    pub skip_ext: Vec<String>,

    /// Skip files whose name matches this glob pattern (repeatable)
    #[arg(short, long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Move files through temporary staging names before the final rename
    #[arg(long, default_value_t = false)]
    pub staged: bool,

    /// Report skipped files and a summary after renaming
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_arguments() {
        let cli = Cli::try_parse_from(["renumber"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("."));
        assert_eq!(cli.skip_ext, vec![".py".to_string()]);
        assert!(cli.exclude.is_empty());
        assert!(!cli.staged);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_skip_ext_replaces_default() {
        let cli =
            Cli::try_parse_from(["renumber", "photos", "--skip-ext", ".sh", "--skip-ext", ".rs"])
                .unwrap();
        assert_eq!(cli.dir, PathBuf::from("photos"));
        assert_eq!(cli.skip_ext, vec![".sh".to_string(), ".rs".to_string()]);
    }

    #[test]
    fn test_exclude_and_flags() {
        let cli = Cli::try_parse_from([
            "renumber",
            "-e",
            "*.md",
            "--exclude",
            "keep.txt",
            "--staged",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.exclude, vec!["*.md".to_string(), "keep.txt".to_string()]);
        assert!(cli.staged);
        assert!(cli.verbose);
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
