//! # 构建器模块
//!
//! 每个命名空间产出两个文件：
//!
//! - `gzip_csv` - 压缩的CSV数据集（共享表头 + 命中的原始行）
//! - `json_sidecar` - 去重文本的JSON数组

pub mod gzip_csv;
pub mod json_sidecar;

// Re-export commonly used items for convenience
pub use gzip_csv::{create_file_sink, GzipCsvBuilder, DEFAULT_COMPRESSION_LEVEL};
pub use json_sidecar::write_unique_texts;
