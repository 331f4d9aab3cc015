//! 配置系统
//! 从 .env 文件与环境变量加载配置（前缀 ERP_）

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// 单页行数上限的硬性上界
pub const PAGE_SIZE_CEILING: usize = 1000;

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别: trace, debug, info, warn, error
    pub level: String,
    /// 日志格式: json, pretty
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    /// 列表默认每页行数
    pub default_page_size: usize,
    /// 允许调用方请求的最大每页行数
    pub max_page_size: usize,
}

impl PaginationConfig {
    /// 将调用方请求的每页行数归一到 [1, max_page_size]
    ///
    /// 未指定或为 0 时使用默认值。
    pub fn clamp_page_size(&self, requested: Option<usize>) -> usize {
        match requested {
            Some(0) | None => self.default_page_size,
            Some(size) => size.min(self.max_page_size),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub pagination: PaginationConfig,
}

impl AppConfig {
    /// 先加载 .env 文件，再从环境变量加载配置
    ///
    /// 按优先级加载：.env.{ERP_ENV} 或 .env.local > .env，
    /// 已存在的环境变量不会被覆盖。
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(env) = std::env::var("ERP_ENV") {
            dotenv::from_filename(format!(".env.{}", env)).ok();
        } else {
            dotenv::from_filename(".env.local").ok();
        }
        dotenv::dotenv().ok();

        Self::from_env()
    }

    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = PaginationConfig::default();

        let settings = Config::builder()
            .set_default("logging.level", "info")?
            .set_default("logging.format", "json")?
            .set_default("pagination.default_page_size", defaults.default_page_size as u64)?
            .set_default("pagination.max_page_size", defaults.max_page_size as u64)?
            .add_source(
                Environment::with_prefix("ERP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: AppConfig = settings.build()?.try_deserialize()?;

        config.validate()?;

        Ok(config)
    }

    /// 验证配置合法性
    fn validate(&self) -> Result<(), ConfigError> {
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::Message(format!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                )))
            }
        }

        match self.logging.format.to_lowercase().as_str() {
            "json" | "pretty" => {}
            _ => {
                return Err(ConfigError::Message(format!(
                    "Invalid log format: {}. Must be one of: json, pretty",
                    self.logging.format
                )))
            }
        }

        if self.pagination.default_page_size == 0 {
            return Err(ConfigError::Message(
                "default_page_size must be >= 1".to_string(),
            ));
        }

        if self.pagination.max_page_size < self.pagination.default_page_size {
            return Err(ConfigError::Message(
                "max_page_size must be >= default_page_size".to_string(),
            ));
        }

        if self.pagination.max_page_size > PAGE_SIZE_CEILING {
            return Err(ConfigError::Message(format!(
                "max_page_size must be <= {}",
                PAGE_SIZE_CEILING
            )));
        }

        Ok(())
    }
}
