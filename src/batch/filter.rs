//! # 排除规则
//!
//! 决定哪些文件保持原名。被排除的文件仍然占用自己的序号。
//!
//! ## 规则
//! - 扩展名完全匹配（区分大小写，含前导 `.`）
//! - 文件名完全匹配
//! - glob 模式匹配文件名
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 构建，被 `batch/runner.rs` 使用
//! - 使用 `glob::Pattern`

use crate::error::{RenumberError, Result};
use crate::models::FileEntry;

/// 排除规则集合
#[derive(Debug, Default)]
pub struct ExclusionFilter {
    extensions: Vec<String>,
    names: Vec<String>,
    patterns: Vec<glob::Pattern>,
}

impl ExclusionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置跳过的扩展名
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// 追加一个按文件名完全匹配的排除项
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// 设置 glob 模式
    pub fn with_patterns(mut self, patterns: &[String]) -> Result<Self> {
        self.patterns = patterns
            .iter()
            .map(|p| {
                glob::Pattern::new(p).map_err(|e| {
                    RenumberError::InvalidArgument(format!("Invalid pattern '{}': {}", p, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// 检查条目是否被排除
    pub fn is_excluded(&self, entry: &FileEntry) -> bool {
        self.extensions.iter().any(|ext| *ext == entry.extension)
            || self.names.iter().any(|name| *name == entry.original_name)
            || self
                .patterns
                .iter()
                .any(|p| p.matches(&entry.original_name))
    }
}
