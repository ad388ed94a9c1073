//! 路由模块
//!
//! - `expression`: 过滤表达式求值
//! - `namespace`: 命名空间规则与默认目录
//! - `router`: 单次遍历中把每一行分发到所有命中的命名空间

pub mod expression;
pub mod namespace;
pub mod router;

pub use expression::{matches, FilterExpression};
pub use namespace::{default_catalog, CompiledRule, Namespace, NamespaceRule};
pub use router::{FinishedNamespace, NamespaceRouter, RouteOutcome};
