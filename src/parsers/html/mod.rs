//! HTML解析和文本提取模块
//!
//! - `utils`: 判断内容是否为HTML
//! - `dom`: 基础DOM构建与遍历
//! - `text`: 文本节点提取（失败时回退为原文）

pub mod dom;
pub mod text;
pub mod utils;

pub use dom::{collect_text_nodes, html_to_dom};
pub use text::{extract_text, Extraction};
pub use utils::{looks_like_html, HTML_MARKERS};
