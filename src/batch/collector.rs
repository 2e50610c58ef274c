//! # 文件收集器
//!
//! 列出目标目录中的普通文件，按文件名字典序排序。
//!
//! ## 功能
//! - 只看目录本身，不递归
//! - 指向普通文件的符号链接视为文件，悬空、循环、指向目录的链接被忽略
//! - 文件名必须是合法 UTF-8
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{RenumberError, Result};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 目标目录
    dir: PathBuf,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// 收集目录中所有普通文件名，按字节序升序排列
    pub fn collect(&self) -> Result<Vec<String>> {
        if !self.dir.is_dir() {
            return Err(RenumberError::DirectoryNotFound {
                path: self.dir.display().to_string(),
            });
        }

        let walker = WalkDir::new(&self.dir).min_depth(1).max_depth(1);

        let mut names = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| RenumberError::DirectoryReadError {
                path: self.dir.display().to_string(),
                source: io::Error::from(e),
            })?;

            if !is_regular_file(entry.path()) {
                continue;
            }

            match entry.file_name().to_str() {
                Some(name) => names.push(name.to_string()),
                None => {
                    return Err(RenumberError::InvalidFileName {
                        path: entry.path().display().to_string(),
                    })
                }
            }
        }

        names.sort();
        Ok(names)
    }
}

/// 跟随符号链接判断是否为普通文件，无法解析的链接视为非文件
fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
