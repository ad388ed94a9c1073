//! 过滤表达式
//!
//! `&` 连接的子句取与，子句内 `|` 分隔的备选项取或，
//! 备选项按区分大小写的子串包含判断。空备选项总是匹配。

use std::fmt;

/// 子句分隔符
pub const CLAUSE_SEPARATOR: char = '&';
/// 备选项分隔符
pub const ALTERNATIVE_SEPARATOR: char = '|';

/// 解析后的过滤表达式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpression {
    source: String,
    clauses: Vec<Vec<String>>,
}

impl FilterExpression {
    /// 解析表达式字符串
    pub fn parse(expression: &str) -> Self {
        let clauses = expression
            .split(CLAUSE_SEPARATOR)
            .map(|clause| {
                clause
                    .split(ALTERNATIVE_SEPARATOR)
                    .map(str::to_string)
                    .collect()
            })
            .collect();

        Self {
            source: expression.to_string(),
            clauses,
        }
    }

    /// 每个子句至少有一个备选项是 `value` 的子串时匹配
    pub fn matches(&self, value: &str) -> bool {
        self.clauses.iter().all(|alternatives| {
            alternatives
                .iter()
                .any(|alternative| value.contains(alternative.as_str()))
        })
    }

    /// 原始表达式
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// 子句数量
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl From<&str> for FilterExpression {
    fn from(expression: &str) -> Self {
        Self::parse(expression)
    }
}

/// 便利函数：直接对字符串表达式求值
pub fn matches(expression: &str, value: &str) -> bool {
    expression.split(CLAUSE_SEPARATOR).all(|clause| {
        clause
            .split(ALTERNATIVE_SEPARATOR)
            .any(|alternative| value.contains(alternative))
    })
}
