//! # 解析器模块
//!
//! - `record` - 按固定列位置解析源导出文件中的一行
//! - `html` - HTML片段解析和文本节点提取

pub mod html;
pub mod record;

// Re-export commonly used items for convenience
pub use html::{extract_text, looks_like_html, Extraction};
pub use record::{trim_line_ending, SourceRecord};
