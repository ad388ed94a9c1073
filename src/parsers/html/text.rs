//! HTML 文本提取
//!
//! 解析失败时不报错，而是把整个输入当作一个不透明的文本值返回。

use tracing::debug;

use super::dom::{collect_text_nodes, html_to_dom};

/// 文本提取结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// 按文档顺序排列的文本节点内容（可能重复）
    Extracted(Vec<String>),
    /// 解析失败，原样保留的输入
    Opaque(String),
}

impl Extraction {
    /// 是否为解析失败的回退结果
    pub fn is_opaque(&self) -> bool {
        matches!(self, Extraction::Opaque(_))
    }

    /// 转换为文本序列，解析失败时为单元素序列 `[html]`
    pub fn into_texts(self) -> Vec<String> {
        match self {
            Extraction::Extracted(texts) => texts,
            Extraction::Opaque(html) => vec![html],
        }
    }
}

/// 从 HTML 片段中提取文本节点
pub fn extract_text(html: &str) -> Extraction {
    match html_to_dom(html) {
        Ok(dom) => {
            let mut texts = Vec::new();
            collect_text_nodes(&dom.document, &mut texts);
            Extraction::Extracted(texts)
        }
        Err(e) => {
            debug!("HTML解析失败，按原文处理: {}", e);
            Extraction::Opaque(html.to_string())
        }
    }
}
