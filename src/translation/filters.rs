//! 文本过滤器模块
//!
//! 判断提取出的文本是否为噪声（商品编号、引号残留等），
//! 噪声文本不会进入去重集合。

use std::collections::HashMap;

use crate::translation::config::constants;

/// 过滤原因
///
/// 各项检查按声明顺序执行，前一项命中后不再继续。
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum OmitReason {
    /// 空串或引号残留
    QuoteArtifact,
    /// 以数字开头
    LeadingDigit,
    /// 前两个字符已是大写
    UppercasePrefix,
    /// 首个单词含非ASCII字母字符
    NonAlphabeticFirstWord,
}

/// 返回文本被过滤的原因，`None` 表示应保留
pub fn omit_reason(text: &str) -> Option<OmitReason> {
    if constants::QUOTE_ARTIFACTS.contains(&text) {
        return Some(OmitReason::QuoteArtifact);
    }

    if text.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return Some(OmitReason::LeadingDigit);
    }

    let prefix: String = text.chars().take(2).collect();
    if prefix.to_uppercase() == prefix {
        return Some(OmitReason::UppercasePrefix);
    }

    let first_word = text.split(char::is_whitespace).next().unwrap_or_default();
    if first_word.is_empty() || !first_word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Some(OmitReason::NonAlphabeticFirstWord);
    }

    None
}

/// 判断文本是否应从去重输出中排除
pub fn must_be_omitted(text: &str) -> bool {
    omit_reason(text).is_some()
}

/// 文本过滤器，附带过滤统计
#[derive(Debug, Default)]
pub struct TextFilter {
    stats: FilterStats,
}

impl TextFilter {
    /// 创建新的文本过滤器
    pub fn new() -> Self {
        Self::default()
    }

    /// 判断文本是否应保留，并记录统计
    pub fn keep(&mut self, text: &str) -> bool {
        let reason = omit_reason(text);
        self.stats.record_filter(reason);
        reason.is_none()
    }

    /// 获取统计信息
    pub fn get_stats(&self) -> &FilterStats {
        &self.stats
    }
}

/// 文本过滤统计
#[derive(Debug, Clone, Default)]
pub struct FilterStats {
    pub total_texts: usize,
    pub kept_texts: usize,
    pub filtered_out: usize,
    pub by_reason: HashMap<OmitReason, usize>,
}

impl FilterStats {
    /// 记录过滤结果
    pub fn record_filter(&mut self, reason: Option<OmitReason>) {
        self.total_texts += 1;

        match reason {
            None => self.kept_texts += 1,
            Some(reason) => {
                self.filtered_out += 1;
                *self.by_reason.entry(reason).or_insert(0) += 1;
            }
        }
    }
}
