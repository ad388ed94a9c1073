//! 命名空间定义
//!
//! 命名空间是一个目标数据集：一组过滤规则、一个压缩输出和一个去重文本集合。

use std::collections::HashSet;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::builders::GzipCsvBuilder;
use crate::parsers::record::SourceRecord;
use crate::translation::collector::UniqueTextCollector;

use super::expression::FilterExpression;

/// 命名空间过滤规则（配置形式）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceRule {
    /// 命名空间名称，同时用作输出文件名
    pub name: String,
    /// `defaultContent` 列的过滤表达式
    #[serde(default)]
    pub default_content: String,
    /// `type` 列的过滤表达式，与内容过滤一样按子串匹配
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    /// `field` 列的过滤表达式
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl NamespaceRule {
    pub fn new(name: &str, default_content: &str) -> Self {
        Self {
            name: name.to_string(),
            default_content: default_content.to_string(),
            record_type: None,
            field: None,
        }
    }

    /// 限定 `type` 列
    pub fn with_type(mut self, record_type: &str) -> Self {
        self.record_type = Some(record_type.to_string());
        self
    }

    /// 限定 `field` 列
    pub fn with_field(mut self, field: &str) -> Self {
        self.field = Some(field.to_string());
        self
    }

    /// 编译为可求值的规则
    pub fn compile(&self) -> CompiledRule {
        CompiledRule {
            default_content: FilterExpression::parse(&self.default_content),
            record_type: self.record_type.as_deref().map(FilterExpression::parse),
            field: self.field.as_deref().map(FilterExpression::parse),
        }
    }
}

/// 默认命名空间目录（顺序即输出顺序）
pub fn default_catalog() -> Vec<NamespaceRule> {
    vec![
        NamespaceRule::new("variations", "Die folgenden Produkte|Variante"),
        NamespaceRule::new("manufacturers", "Hersteller|Manufacturer"),
        NamespaceRule::new("faq", "FAQ|Frage&?"),
        NamespaceRule::new("properties", "Eigenschaft|Merkmal").with_field("name"),
        NamespaceRule::new("emailTemplates", "").with_type("MAIL_TEMPLATE"),
    ]
}

/// 检查命名空间目录
///
/// 名称同时是输出文件名，必须非空、唯一，且不能包含路径分隔符或指向上级目录。
/// 返回第一个问题的描述。
pub fn check_catalog(rules: &[NamespaceRule]) -> Result<(), String> {
    if rules.is_empty() {
        return Err("至少需要一个命名空间".to_string());
    }

    let mut names = HashSet::new();
    for rule in rules {
        let name = rule.name.as_str();
        if name.trim().is_empty() {
            return Err("命名空间名称不能为空".to_string());
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(format!("命名空间名称不能用作文件名: {}", name));
        }
        if !names.insert(name) {
            return Err(format!("命名空间名称重复: {}", name));
        }
    }

    Ok(())
}

/// 编译后的过滤规则
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub default_content: FilterExpression,
    pub record_type: Option<FilterExpression>,
    pub field: Option<FilterExpression>,
}

impl CompiledRule {
    /// 依次检查内容、类型、字段，任一失败即返回
    pub fn accepts(&self, record: &SourceRecord<'_>) -> bool {
        if !self.default_content.matches(record.default_content) {
            return false;
        }

        if let Some(ref record_type) = self.record_type {
            if !record_type.matches(record.record_type) {
                return false;
            }
        }

        if let Some(ref field) = self.field {
            if !field.matches(record.field) {
                return false;
            }
        }

        true
    }
}

/// 运行期命名空间状态
pub struct Namespace<W: Write> {
    pub name: String,
    pub rule: CompiledRule,
    pub sink: GzipCsvBuilder<W>,
    pub unique_texts: UniqueTextCollector,
    pub matched_lines: usize,
}

impl<W: Write> Namespace<W> {
    pub fn new(rule: &NamespaceRule, sink: GzipCsvBuilder<W>) -> Self {
        Self {
            name: rule.name.clone(),
            rule: rule.compile(),
            sink,
            unique_texts: UniqueTextCollector::new(),
            matched_lines: 0,
        }
    }
}
