//! 翻译文件预处理模块
//!
//! - **filters**: 判断提取出的文本是否为噪声
//! - **collector**: 每个命名空间的去重文本集合
//! - **config**: 配置管理
//! - **error**: 错误处理

/// 配置管理模块 - 输入输出路径、压缩级别和命名空间目录
pub mod config;

/// 去重文本收集模块
pub mod collector;

/// 错误处理模块 - 统一的错误类型
pub mod error;

/// 文本过滤模块 - 商品编号和引号残留等噪声判断
pub mod filters;

pub use collector::UniqueTextCollector;
pub use config::{ConfigManager, PrepConfig};
pub use error::{ErrorCategory, PrepError, PrepResult};
pub use filters::{must_be_omitted, omit_reason, OmitReason, TextFilter};
