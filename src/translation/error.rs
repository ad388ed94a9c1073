//! 预处理模块统一错误处理
//!
//! 提供结构化错误类型。HTML解析失败与缺失字段都不是错误，
//! 只有I/O、序列化、归档和配置问题会中止整个运行。

use std::fmt;

use thiserror::Error;

/// 预处理错误类型
#[derive(Error, Debug)]
pub enum PrepError {
    /// 无法打开或读取声明的源文件
    #[error("源文件读取失败 {path}: {source}")]
    SourceIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 无法写入或关闭命名空间输出
    #[error("命名空间 {namespace} 输出失败: {source}")]
    SinkIo {
        namespace: String,
        #[source]
        source: std::io::Error,
    },

    /// 去重文本序列化错误
    #[error("序列化错误: {0}")]
    Serialization(String),

    /// 归档解压错误
    #[error("归档错误: {0}")]
    Archive(String),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 输入验证错误
    #[error("输入无效: {0}")]
    InvalidInput(String),

    /// 其余I/O错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

impl PrepError {
    /// 创建源文件错误
    pub fn source_io<P: fmt::Display>(path: P, source: std::io::Error) -> Self {
        PrepError::SourceIo {
            path: path.to_string(),
            source,
        }
    }

    /// 创建输出错误
    pub fn sink_io<N: fmt::Display>(namespace: N, source: std::io::Error) -> Self {
        PrepError::SinkIo {
            namespace: namespace.to_string(),
            source,
        }
    }

    /// 获取错误类别
    pub fn category(&self) -> ErrorCategory {
        match self {
            PrepError::SourceIo { .. } => ErrorCategory::Input,
            PrepError::SinkIo { .. } => ErrorCategory::Output,
            PrepError::Serialization(_) => ErrorCategory::Serialization,
            PrepError::Archive(_) => ErrorCategory::Archive,
            PrepError::Config(_) => ErrorCategory::Configuration,
            PrepError::InvalidInput(_) => ErrorCategory::Input,
            PrepError::Io(_) => ErrorCategory::Output,
        }
    }
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
    Serialization,
    Archive,
}

impl From<serde_json::Error> for PrepError {
    fn from(error: serde_json::Error) -> Self {
        PrepError::Serialization(format!("JSON序列化错误: {}", error))
    }
}

impl From<zip::result::ZipError> for PrepError {
    fn from(error: zip::result::ZipError) -> Self {
        PrepError::Archive(error.to_string())
    }
}

impl From<config::ConfigError> for PrepError {
    fn from(error: config::ConfigError) -> Self {
        PrepError::Config(error.to_string())
    }
}

impl From<toml::de::Error> for PrepError {
    fn from(error: toml::de::Error) -> Self {
        PrepError::Config(format!("TOML解析错误: {}", error))
    }
}

/// 错误结果类型别名
pub type PrepResult<T> = Result<T, PrepError>;
