//! # Translation Prep
//!
//! 把商品数据导出（CSV）按命名空间拆分为待翻译的数据集。
//!
//! ## 模块组织
//!
//! - `core` - 流水线驱动和运行报告
//! - `archive` - 导出归档解压
//! - `parsers` - 源记录解析和HTML文本提取
//! - `routing` - 过滤表达式、命名空间和路由器
//! - `builders` - 压缩CSV和去重文本输出
//! - `translation` - 配置、错误类型、文本过滤和去重收集
//! - `env` - 环境变量

pub mod archive;
pub mod builders;
pub mod core;
pub mod env;
pub mod parsers;
pub mod routing;
pub mod translation;

// Re-export commonly used items for convenience
pub use archive::extract_archive;
pub use crate::core::{prepare_csvs, PrepOptions, RunOutcome, RunReport};
pub use routing::{default_catalog, matches, FilterExpression, NamespaceRule};
pub use translation::{must_be_omitted, ConfigManager, PrepConfig, PrepError, PrepResult};
