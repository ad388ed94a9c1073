//! 源记录解析
//!
//! 导出文件按固定列位置读取，不处理引号内的逗号或跨行字段。

/// `type` 列位置
pub const TYPE_INDEX: usize = 0;
/// `id` 列位置
pub const ID_INDEX: usize = 1;
/// `field` 列位置
pub const FIELD_INDEX: usize = 2;
/// `defaultContent` 列位置
pub const DEFAULT_CONTENT_INDEX: usize = 6;

/// 一行源数据中用到的字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord<'a> {
    pub record_type: &'a str,
    pub id: &'a str,
    pub field: &'a str,
    pub default_content: &'a str,
}

impl<'a> SourceRecord<'a> {
    /// 按逗号拆分一行
    ///
    /// 少于7列时 `defaultContent` 缺失，返回 `None`，调用方应跳过该行。
    /// 空字符串内容不算缺失。
    pub fn parse(line: &'a str) -> Option<Self> {
        let fields: Vec<&'a str> = line.split(',').collect();
        let default_content = *fields.get(DEFAULT_CONTENT_INDEX)?;

        Some(SourceRecord {
            record_type: fields[TYPE_INDEX],
            id: fields[ID_INDEX],
            field: fields[FIELD_INDEX],
            default_content,
        })
    }
}

/// 去掉行尾的换行符
pub fn trim_line_ending(line: &str) -> &str {
    line.trim_end_matches(&['\n', '\r'][..])
}
