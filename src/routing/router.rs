//! 命名空间路由器
//!
//! 对每一行源数据独立评估所有命名空间，一行可以进入零个、一个或多个命名空间。

use std::io::Write;

use tracing::trace;

use crate::builders::GzipCsvBuilder;
use crate::parsers::record::SourceRecord;
use crate::translation::error::{PrepError, PrepResult};
use crate::translation::filters::{FilterStats, TextFilter};

use super::namespace::{Namespace, NamespaceRule};

/// 单行路由结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// 缺少 `defaultContent` 列，整行跳过
    Skipped,
    /// 命中的命名空间数量（可以为0）
    Routed(usize),
}

/// 已结束的命名空间
#[derive(Debug)]
pub struct FinishedNamespace<W> {
    pub name: String,
    pub writer: W,
    pub matched_lines: usize,
    pub unique_texts: Vec<String>,
}

/// 命名空间路由器
pub struct NamespaceRouter<W: Write> {
    namespaces: Vec<Namespace<W>>,
    filter: TextFilter,
}

impl<W: Write> NamespaceRouter<W> {
    /// 为每条规则创建输出并写入共享表头
    pub fn new<F>(
        rules: &[NamespaceRule],
        header: &str,
        level: u32,
        mut open_sink: F,
    ) -> PrepResult<Self>
    where
        F: FnMut(&NamespaceRule) -> std::io::Result<W>,
    {
        let mut namespaces = Vec::with_capacity(rules.len());

        for rule in rules {
            let sink = open_sink(rule)
                .and_then(|writer| GzipCsvBuilder::new(writer, header, level))
                .map_err(|e| PrepError::sink_io(&rule.name, e))?;
            namespaces.push(Namespace::new(rule, sink));
        }

        Ok(Self {
            namespaces,
            filter: TextFilter::new(),
        })
    }

    /// 路由一行数据
    pub fn route(&mut self, line: &str) -> PrepResult<RouteOutcome> {
        let Some(record) = SourceRecord::parse(line) else {
            trace!("跳过缺少内容列的行: {}", line);
            return Ok(RouteOutcome::Skipped);
        };

        let mut routed = 0;

        for namespace in self.namespaces.iter_mut() {
            if !namespace.rule.accepts(&record) {
                continue;
            }

            namespace
                .sink
                .append_line(line)
                .map_err(|e| PrepError::sink_io(&namespace.name, e))?;
            namespace.matched_lines += 1;

            namespace
                .unique_texts
                .collect_content(record.default_content, &mut self.filter);

            routed += 1;
        }

        Ok(RouteOutcome::Routed(routed))
    }

    /// 命名空间名称（按目录顺序）
    pub fn namespace_names(&self) -> Vec<&str> {
        self.namespaces.iter().map(|ns| ns.name.as_str()).collect()
    }

    /// 文本过滤统计
    pub fn filter_stats(&self) -> &FilterStats {
        self.filter.get_stats()
    }

    /// 关闭所有输出，每个命名空间只结束一次
    pub fn finish(self) -> PrepResult<Vec<FinishedNamespace<W>>> {
        self.namespaces
            .into_iter()
            .map(|namespace| -> PrepResult<FinishedNamespace<W>> {
                let writer = namespace
                    .sink
                    .finish()
                    .map_err(|e| PrepError::sink_io(&namespace.name, e))?;

                Ok(FinishedNamespace {
                    name: namespace.name,
                    writer,
                    matched_lines: namespace.matched_lines,
                    unique_texts: namespace.unique_texts.into_texts(),
                })
            })
            .collect()
    }
}
