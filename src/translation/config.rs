//! 预处理配置管理模块
//!
//! 配置按以下顺序叠加：内置默认值 → 配置文件 → 环境变量（前缀 `TRANSLATION_PREP`）

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::routing::namespace::{check_catalog, default_catalog, NamespaceRule};
use crate::translation::error::{PrepError, PrepResult};

/// 配置常量
pub mod constants {
    pub const CONFIG_PATHS: &[&str] = &[
        "translation-prep.toml",
        "config/translation-prep.toml",
        "~/.config/translation-prep/config.toml",
    ];

    pub const ENV_PREFIX: &str = "TRANSLATION_PREP";

    // 默认路径
    pub const DEFAULT_ARCHIVE_PATH: &str = "./tmp/zip.zip";
    pub const DEFAULT_EXTRACT_DIR: &str = "./tmp";
    pub const DEFAULT_SOURCE_DIR: &str = "./tmp";
    pub const DEFAULT_OUTPUT_DIR: &str = "./tmp/out";
    pub const DEFAULT_SOURCE_ENCODING: &str = "utf-8";
    pub const MAX_COMPRESSION_LEVEL: u32 = 9;

    // 输出文件命名
    pub const CSV_EXTENSION: &str = "csv.gz";
    pub const UNIQUE_SUFFIX: &str = "-unique";
    pub const JSON_EXTENSION: &str = "json";

    // 导出文件中的引号残留
    pub const QUOTE_ARTIFACTS: &[&str] = &["", "\"", "\"\"", "\" \""];
}

/// 完整配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PrepConfig {
    pub pipeline: PipelineConfig,
    pub archive: ArchiveConfig,
    pub namespaces: Vec<NamespaceRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// 源文件所在目录，文件名相对于此目录解析
    pub source_dir: String,
    /// 输出目录
    pub output_dir: String,
    /// 源文件字符编码（encoding_rs 标签）
    pub source_encoding: String,
    /// gzip 压缩级别 0-9
    pub compression_level: u32,
    /// 每个源文件的首行都视为表头，不参与路由
    pub skip_header_in_every_file: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArchiveConfig {
    /// 导出归档路径
    pub path: String,
    /// 解压目录
    pub extract_dir: String,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig {
                source_dir: constants::DEFAULT_SOURCE_DIR.to_string(),
                output_dir: constants::DEFAULT_OUTPUT_DIR.to_string(),
                source_encoding: constants::DEFAULT_SOURCE_ENCODING.to_string(),
                compression_level: crate::builders::DEFAULT_COMPRESSION_LEVEL,
                skip_header_in_every_file: true,
            },
            archive: ArchiveConfig {
                path: constants::DEFAULT_ARCHIVE_PATH.to_string(),
                extract_dir: constants::DEFAULT_EXTRACT_DIR.to_string(),
            },
            namespaces: default_catalog(),
        }
    }
}

impl PrepConfig {
    /// 从 TOML 文本解析（缺失的段落使用默认值）
    pub fn from_toml_str(content: &str) -> PrepResult<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from_str(content, config::FileFormat::Toml))
            .build()?;

        let prep_config: PrepConfig = config.try_deserialize()?;
        prep_config.validate()?;
        Ok(prep_config)
    }

    /// 序列化为 TOML
    pub fn to_toml_string(&self) -> PrepResult<String> {
        toml::to_string_pretty(self).map_err(|e| PrepError::Config(e.to_string()))
    }

    /// 验证配置
    pub fn validate(&self) -> PrepResult<()> {
        check_catalog(&self.namespaces).map_err(PrepError::Config)?;

        if self.pipeline.compression_level > constants::MAX_COMPRESSION_LEVEL {
            return Err(PrepError::Config(format!(
                "压缩级别必须在0-{}之间: {}",
                constants::MAX_COMPRESSION_LEVEL,
                self.pipeline.compression_level
            )));
        }

        Ok(())
    }
}

/// 展开路径中的 `~`
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// 配置管理器
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: PrepConfig,
}

impl ConfigManager {
    /// 加载配置，显式路径优先于搜索路径
    pub fn load(explicit_path: Option<&Path>) -> PrepResult<Self> {
        Self::load_dotenv();

        let mut builder =
            Config::builder().add_source(Config::try_from(&PrepConfig::default())?);

        let config_path = match explicit_path {
            Some(path) => {
                if !path.exists() {
                    return Err(PrepError::Config(format!(
                        "配置文件不存在: {}",
                        path.display()
                    )));
                }
                Some(path.display().to_string())
            }
            None => constants::CONFIG_PATHS
                .iter()
                .map(|path| shellexpand::tilde(path).to_string())
                .find(|path| Path::new(path).exists()),
        };

        if let Some(ref path) = config_path {
            builder = builder.add_source(File::from(Path::new(path)).required(true));
            tracing::info!("加载配置文件: {}", path);
        }

        builder = builder.add_source(
            Environment::with_prefix(constants::ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: PrepConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        tracing::debug!(
            "加载的配置 - 命名空间: {}",
            config
                .namespaces
                .iter()
                .map(|rule| rule.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Self { config })
    }

    /// 加载 .env 文件
    fn load_dotenv() {
        match dotenv::dotenv() {
            Ok(path) => tracing::info!("已加载环境变量文件: {}", path.display()),
            Err(e) => tracing::debug!("未找到 .env 文件或加载失败: {}", e),
        }
    }

    pub fn into_config(self) -> PrepConfig {
        self.config
    }
}
