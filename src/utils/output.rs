//! # 美化输出工具
//!
//! 提供统一的终端输出样式。重命名报告行保持纯文本，便于管道处理。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `commands/`, `batch/runner.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 完成标记
pub const DONE_LINE: &str = "Done renaming files.";

/// 单次重命名的报告行
pub fn rename_line(from: &str, to: &str) -> String {
    format!("Renamed: {} -> {}", from, to)
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印跳过消息
pub fn print_skip(msg: &str) {
    println!("{} {}", "[SKIP]".dimmed(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}
