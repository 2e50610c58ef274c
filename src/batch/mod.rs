//! # 批量处理模块
//!
//! 列出、筛选并重命名目录中的文件。
//!
//! ## 功能
//! - 收集目录中的普通文件并排序
//! - 按扩展名、文件名、glob 模式排除文件
//! - 顺序执行重命名并输出报告
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配模式

pub mod collector;
pub mod filter;
pub mod runner;

pub use collector::FileCollector;
pub use filter::ExclusionFilter;
pub use runner::{BatchResult, BatchRunner, RenameMode};
