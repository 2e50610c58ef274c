//! # 数据模型模块
//!
//! 定义单次运行中使用的文件条目模型。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 子模块: entry

pub mod entry;

pub use entry::FileEntry;
