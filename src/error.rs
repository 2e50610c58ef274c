//! # 统一错误处理模块
//!
//! 定义 renumber 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// renumber 统一错误类型
#[derive(Error, Debug)]
pub enum RenumberError {
    // ─────────────────────────────────────────────────────────────
    // 目录错误
    // ─────────────────────────────────────────────────────────────
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Failed to read directory: {path}")]
    DirectoryReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File name is not valid UTF-8: {path}")]
    InvalidFileName { path: String },

    // ─────────────────────────────────────────────────────────────
    // 重命名错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to rename {from} -> {to}")]
    RenameError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Staging name already exists: {path}")]
    StagingConflict { path: String },

    #[error(
        "Staged rename aborted, {} file(s) left under staging names:\n{}",
        .pending.len(),
        staging_list(.pending)
    )]
    StagingAborted {
        /// (临时名, 原文件名)
        pending: Vec<(String, String)>,
        #[source]
        source: Box<RenumberError>,
    },

    #[error("Failed to write report output")]
    OutputError(#[source] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, RenumberError>;

/// 每行一个 `临时名 <- 原文件名`
fn staging_list(pending: &[(String, String)]) -> String {
    pending
        .iter()
        .map(|(stage, original)| format!("  {} <- {}", stage, original))
        .collect::<Vec<_>>()
        .join("\n")
}
