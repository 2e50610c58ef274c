//! # rename 命令实现
//!
//! 将目录中的文件按字典序重命名为 `number<序号><扩展名>`。
//!
//! ## 功能
//! - 列出目录中的普通文件并排序编号
//! - 跳过脚本扩展名、指定文件名、glob 匹配的文件，以及程序自身
//! - 直接重命名或经临时名两阶段重命名
//! - 每次重命名输出一行，最后输出完成标记
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 定义的参数
//! - 使用 `batch/`, `models/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchResult, BatchRunner, ExclusionFilter, FileCollector, RenameMode};
use crate::cli::Cli;
use crate::error::{RenumberError, Result};
use crate::models::entry::index_entries;
use crate::utils::output;

use std::io::{self, Write};
use std::path::Path;

/// 执行 rename 命令
pub fn execute(args: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = rename_directory(&args, &mut out)?;
    drop(out);

    if args.verbose {
        for name in result.skipped_names() {
            output::print_skip(name);
        }
        let message = summary(&result, &args.dir);
        if result.renamed == 0 {
            output::print_warning(&message);
        } else {
            output::print_done(&message);
        }
    }

    Ok(())
}

/// verbose 模式的汇总信息
fn summary(result: &BatchResult, dir: &Path) -> String {
    if result.renamed == 0 {
        return format!("No files renamed in '{}'", dir.display());
    }
    format!(
        "Renamed {} of {} file(s) in '{}' ({} skipped)",
        result.renamed,
        result.total(),
        dir.display(),
        result.skipped
    )
}

/// 列出、编号并重命名目录中的文件，报告行写入 `out`
pub fn rename_directory<W: Write>(args: &Cli, out: &mut W) -> Result<BatchResult> {
    let filter = build_filter(args)?;

    let names = FileCollector::new(&args.dir).collect()?;
    let entries = index_entries(names);

    let mode = if args.staged {
        RenameMode::Staged
    } else {
        RenameMode::InPlace
    };

    let result = BatchRunner::new(&args.dir, mode).run(&entries, &filter, out)?;

    writeln!(out, "{}", output::DONE_LINE).map_err(RenumberError::OutputError)?;
    Ok(result)
}

/// 根据参数构建排除规则
fn build_filter(args: &Cli) -> Result<ExclusionFilter> {
    let mut filter = ExclusionFilter::new()
        .with_extensions(args.skip_ext.iter().cloned())
        .with_patterns(&args.exclude)?;

    if let Some(name) = own_executable_name(&args.dir) {
        filter = filter.with_name(name);
    }

    Ok(filter)
}

/// 当前可执行文件位于目标目录时返回其文件名
fn own_executable_name(dir: &Path) -> Option<String> {
    let exe = std::env::current_exe().ok()?.canonicalize().ok()?;
    let dir = dir.canonicalize().ok()?;
    if exe.parent()? != dir.as_path() {
        return None;
    }
    exe.file_name()?.to_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("renumber").chain(args.iter().copied())).unwrap()
    }

    fn run(args: &[&str]) -> Result<String> {
        let cli = parse(args);
        let mut out = Vec::new();
        rename_directory(&cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_default_run_skips_python() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join("b.py"), "script").unwrap();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::write(root.join("c.jpg"), "c").unwrap();

        let out = run(&[root.to_str().unwrap()]).unwrap();

        assert_eq!(
            out,
            "Renamed: a.txt -> number0.txt\n\
             Renamed: c.jpg -> number2.jpg\n\
             Done renaming files.\n"
        );
    }

    #[test]
    fn test_script_only_prints_done() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("rename.py"), "script").unwrap();

        let out = run(&[tmp.path().to_str().unwrap()]).unwrap();

        assert_eq!(out, "Done renaming files.\n");
        assert!(tmp.path().join("rename.py").exists());
    }

    #[test]
    fn test_custom_skip_ext_and_exclude() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        for name in ["a.py", "b.sh", "keep.txt", "photo.jpg"] {
            fs::write(root.join(name), name).unwrap();
        }

        let out = run(&[
            root.to_str().unwrap(),
            "--skip-ext",
            ".sh",
            "--exclude",
            "keep.txt",
        ])
        .unwrap();

        assert_eq!(
            out,
            "Renamed: a.py -> number0.py\n\
             Renamed: photo.jpg -> number3.jpg\n\
             Done renaming files.\n"
        );
        assert!(root.join("b.sh").exists());
        assert!(root.join("keep.txt").exists());
    }

    #[test]
    fn test_invalid_pattern_renames_nothing() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("a.txt"), "a").unwrap();

        let err = run(&[tmp.path().to_str().unwrap(), "-e", "[bad"]).unwrap_err();

        assert!(matches!(err, RenumberError::InvalidArgument(_)));
        assert!(tmp.path().join("a.txt").exists());
    }

    #[test]
    fn test_missing_directory() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("nope");

        let err = run(&[missing.to_str().unwrap()]).unwrap_err();

        assert!(matches!(err, RenumberError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_staged_flag() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join("a.txt"), "from a").unwrap();
        fs::write(root.join("number0.txt"), "original").unwrap();

        run(&[root.to_str().unwrap(), "--staged"]).unwrap();

        assert_eq!(fs::read_to_string(root.join("number0.txt")).unwrap(), "from a");
        assert_eq!(fs::read_to_string(root.join("number1.txt")).unwrap(), "original");
    }

    #[test]
    fn test_own_executable_name() {
        let tmp = tempdir().unwrap();
        assert_eq!(own_executable_name(tmp.path()), None);

        let exe = std::env::current_exe().unwrap().canonicalize().unwrap();
        let expected = exe.file_name().unwrap().to_str().unwrap().to_string();
        assert_eq!(own_executable_name(exe.parent().unwrap()), Some(expected));
    }

    #[test]
    fn test_verbose_summary_counts() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        for name in ["a.sh", "b.txt", "notes.md", "z.jpg"] {
            fs::write(root.join(name), name).unwrap();
        }

        let cli = parse(&[
            root.to_str().unwrap(),
            "--skip-ext",
            ".sh",
            "--exclude",
            "*.md",
            "-v",
        ]);
        let mut out = Vec::new();
        let result = rename_directory(&cli, &mut out).unwrap();

        assert_eq!(
            result.skipped_names().collect::<Vec<_>>(),
            vec!["a.sh", "notes.md"]
        );
        assert_eq!(result.total(), 4);
        assert_eq!(
            summary(&result, root),
            format!("Renamed 2 of 4 file(s) in '{}' (2 skipped)", root.display())
        );
    }

    #[test]
    fn test_verbose_summary_nothing_renamed() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("only.py"), "script").unwrap();

        let cli = parse(&[tmp.path().to_str().unwrap()]);
        let mut out = Vec::new();
        let result = rename_directory(&cli, &mut out).unwrap();

        assert_eq!(
            summary(&result, tmp.path()),
            format!("No files renamed in '{}'", tmp.path().display())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_renames_nothing() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::write(root.join(OsStr::from_bytes(b"bad\xff.txt")), "bad").unwrap();

        let cli = parse(&[root.to_str().unwrap()]);
        let mut out = Vec::new();
        let err = rename_directory(&cli, &mut out).unwrap_err();

        assert!(matches!(err, RenumberError::InvalidFileName { .. }));
        assert!(root.join("a.txt").exists());
        assert!(out.is_empty());
    }
}
