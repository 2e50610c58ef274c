//! # 文件条目模型
//!
//! 每个被列出的文件对应一个 `FileEntry`：原始文件名、扩展名、排序序号。
//! 条目在列出时创建，之后不再修改。
//!
//! ## 依赖关系
//! - 被 `batch/filter.rs`, `batch/runner.rs` 使用
//! - 无外部模块依赖

/// 新文件名的固定前缀
pub const TARGET_PREFIX: &str = "number";

/// 单个待处理文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// 目录列出时的原始文件名
    pub original_name: String,
    /// 扩展名（含前导 `.`），无扩展名时为空
    pub extension: String,
    /// 在完整排序列表中的序号（从 0 开始，排除过滤之前分配）
    pub index: usize,
}

impl FileEntry {
    pub fn new(original_name: impl Into<String>, index: usize) -> Self {
        let original_name = original_name.into();
        let extension = split_extension(&original_name).1.to_string();
        Self {
            original_name,
            extension,
            index,
        }
    }

    /// 目标文件名 `number<index><extension>`
    pub fn target_name(&self) -> String {
        format!("{}{}{}", TARGET_PREFIX, self.index, self.extension)
    }
}

/// 为已排序的文件名列表分配序号
pub fn index_entries(sorted_names: Vec<String>) -> Vec<FileEntry> {
    sorted_names
        .into_iter()
        .enumerate()
        .map(|(index, name)| FileEntry::new(name, index))
        .collect()
}

/// 拆分基本名与扩展名
///
/// 扩展名从最后一个 `.` 开始（含 `.`）。文件名开头的连续 `.` 属于基本名，
/// 因此 `.bashrc` 没有扩展名。
pub fn split_extension(name: &str) -> (&str, &str) {
    let leading_dots = name.len() - name.trim_start_matches('.').len();
    match name[leading_dots..].rfind('.') {
        Some(pos) => name.split_at(leading_dots + pos),
        None => (name, ""),
    }
}
