//! # 重命名执行器
//!
//! 按排序顺序依次重命名文件，每完成一次重命名就写出一行报告。
//!
//! ## 模式
//! - `InPlace`: 逐个直接重命名为目标名。目标已存在时直接覆盖，
//!   若目标恰好是尚未处理的原文件，其内容会丢失。
//! - `Staged`: 先把所有待重命名文件移到同目录下的临时名，再移到目标名。
//!   参与重命名的文件之间不会互相覆盖。
//!
//! 任何文件系统错误立即终止，不回滚。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `batch/filter.rs`, `models/`, `utils/output.rs`

use crate::batch::ExclusionFilter;
use crate::error::{RenumberError, Result};
use crate::models::FileEntry;
use crate::utils::output;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 重命名模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameMode {
    InPlace,
    Staged,
}

/// 单个文件处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 已重命名
    Renamed { from: String, to: String },
    /// 被排除，保持原名
    Skipped(String),
}

impl ProcessResult {
    /// 报告行，跳过的文件没有报告行
    pub fn report_line(&self) -> Option<String> {
        match self {
            ProcessResult::Renamed { from, to } => Some(output::rename_line(from, to)),
            ProcessResult::Skipped(_) => None,
        }
    }
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 重命名数量
    pub renamed: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 按排序顺序的处理结果
    pub outcomes: Vec<ProcessResult>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match &result {
            ProcessResult::Renamed { .. } => self.renamed += 1,
            ProcessResult::Skipped(_) => self.skipped += 1,
        }
        self.outcomes.push(result);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.renamed + self.skipped
    }

    /// 被跳过的文件名
    pub fn skipped_names(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().filter_map(|r| match r {
            ProcessResult::Skipped(name) => Some(name.as_str()),
            ProcessResult::Renamed { .. } => None,
        })
    }
}

/// 批量重命名执行器
pub struct BatchRunner {
    /// 目标目录
    dir: PathBuf,
    mode: RenameMode,
}

impl BatchRunner {
    pub fn new(dir: impl Into<PathBuf>, mode: RenameMode) -> Self {
        Self {
            dir: dir.into(),
            mode,
        }
    }

    /// 处理已排序并编号的条目，报告行写入 `out`
    pub fn run<W: Write>(
        &self,
        entries: &[FileEntry],
        filter: &ExclusionFilter,
        out: &mut W,
    ) -> Result<BatchResult> {
        match self.mode {
            RenameMode::InPlace => self.run_in_place(entries, filter, out),
            RenameMode::Staged => self.run_staged(entries, filter, out),
        }
    }

    fn run_in_place<W: Write>(
        &self,
        entries: &[FileEntry],
        filter: &ExclusionFilter,
        out: &mut W,
    ) -> Result<BatchResult> {
        let mut result = BatchResult::default();

        for entry in entries {
            if filter.is_excluded(entry) {
                result.merge(ProcessResult::Skipped(entry.original_name.clone()));
                continue;
            }

            let target = entry.target_name();
            rename_in(&self.dir, &entry.original_name, &target)?;
            let outcome = ProcessResult::Renamed {
                from: entry.original_name.clone(),
                to: target,
            };
            report(out, &outcome)?;
            result.merge(outcome);
        }

        Ok(result)
    }

    fn run_staged<W: Write>(
        &self,
        entries: &[FileEntry],
        filter: &ExclusionFilter,
        out: &mut W,
    ) -> Result<BatchResult> {
        let staged: Vec<(&FileEntry, String)> = entries
            .iter()
            .filter(|e| !filter.is_excluded(e))
            .map(|e| (e, staging_name(e.index)))
            .collect();

        // 任何重命名之前检查临时名是否被占用
        for (_, stage) in &staged {
            let path = self.dir.join(stage);
            if path.symlink_metadata().is_ok() {
                return Err(RenumberError::StagingConflict {
                    path: path.display().to_string(),
                });
            }
        }

        // (临时名, 原文件名)，记录仍停留在临时名下的文件
        let mut pending: Vec<(String, String)> = Vec::with_capacity(staged.len());
        for (entry, stage) in &staged {
            if let Err(e) = rename_in(&self.dir, &entry.original_name, stage) {
                return Err(abort_staging(pending, e));
            }
            pending.push((stage.clone(), entry.original_name.clone()));
        }

        let mut result = BatchResult::default();
        let mut done = 0;

        for entry in entries {
            let Some((stage, original)) = pending.get(done) else {
                result.merge(ProcessResult::Skipped(entry.original_name.clone()));
                continue;
            };
            if *original != entry.original_name {
                result.merge(ProcessResult::Skipped(entry.original_name.clone()));
                continue;
            }

            let target = entry.target_name();
            if let Err(e) = rename_in(&self.dir, stage, &target) {
                return Err(abort_staging(pending.split_off(done), e));
            }
            done += 1;

            let outcome = ProcessResult::Renamed {
                from: entry.original_name.clone(),
                to: target,
            };
            report(out, &outcome)?;
            result.merge(outcome);
        }

        Ok(result)
    }
}

/// 中途失败时附上仍在临时名下的文件，便于手工恢复
fn abort_staging(pending: Vec<(String, String)>, err: RenumberError) -> RenumberError {
    if pending.is_empty() {
        return err;
    }
    RenumberError::StagingAborted {
        pending,
        source: Box::new(err),
    }
}

/// 临时名：隐藏文件，包含进程号与序号
fn staging_name(index: usize) -> String {
    format!(
        ".{}-{}-{}.stage",
        env!("CARGO_PKG_NAME"),
        std::process::id(),
        index
    )
}

/// 在目录内重命名，目标存在时按平台语义覆盖
fn rename_in(dir: &Path, from: &str, to: &str) -> Result<()> {
    fs::rename(dir.join(from), dir.join(to)).map_err(|e| RenumberError::RenameError {
        from: from.to_string(),
        to: to.to_string(),
        source: e,
    })
}

fn report<W: Write>(out: &mut W, outcome: &ProcessResult) -> Result<()> {
    match outcome.report_line() {
        Some(line) => writeln!(out, "{}", line).map_err(RenumberError::OutputError),
        None => Ok(()),
    }
}
