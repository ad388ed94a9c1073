//! 去重文本收集器模块
//!
//! 每个命名空间持有一个收集器，保存从命中行中提取出的唯一文本，
//! 按首次插入的顺序输出。

use std::collections::HashSet;

use tracing::debug;

use crate::parsers::html::{extract_text, looks_like_html, Extraction};
use crate::translation::filters::TextFilter;

/// 去重文本收集器
#[derive(Debug, Default)]
pub struct UniqueTextCollector {
    seen: HashSet<String>,
    ordered: Vec<String>,
    duplicate_texts: usize,
}

impl UniqueTextCollector {
    /// 创建空收集器
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入文本，已存在时返回 `false`
    pub fn insert(&mut self, text: &str) -> bool {
        if self.seen.contains(text) {
            self.duplicate_texts += 1;
            return false;
        }

        self.seen.insert(text.to_string());
        self.ordered.push(text.to_string());
        true
    }

    /// 收集一条内容
    ///
    /// HTML内容先提取文本节点再逐个过滤，其余内容整体过滤后插入。
    /// 返回新插入的文本数量。
    pub fn collect_content(&mut self, content: &str, filter: &mut TextFilter) -> usize {
        if !looks_like_html(content) {
            return usize::from(filter.keep(content) && self.insert(content));
        }

        let extraction = extract_text(content);
        if let Extraction::Opaque(_) = extraction {
            debug!("内容按不透明文本处理: {} 字节", content.len());
        }

        extraction
            .into_texts()
            .iter()
            .filter(|text| filter.keep(text))
            .filter(|text| self.insert(text))
            .count()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.seen.contains(text)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// 重复插入的次数
    pub fn duplicate_count(&self) -> usize {
        self.duplicate_texts
    }

    /// 按插入顺序查看文本
    pub fn texts(&self) -> &[String] {
        &self.ordered
    }

    pub fn into_texts(self) -> Vec<String> {
        self.ordered
    }
}
