//! 统一错误模型
//! 定义核心工具的错误类型，供展示层映射为 REST 错误提示

use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid page size: {0} (must be >= 1)")]
    InvalidPageSize(usize),

    #[error("Invalid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid date range: {end} is before {start}")]
    InvalidDateRange { start: String, end: String },

    #[error("Access denied: missing permission {required}")]
    Forbidden { required: String },
}

impl AppError {
    /// 获取错误码（HTTP 状态码语义）
    pub fn code(&self) -> u16 {
        match self {
            AppError::Validation(_)
            | AppError::InvalidPageSize(_)
            | AppError::InvalidDate(_)
            | AppError::InvalidDateRange { .. } => 400,
            AppError::Forbidden { .. } => 403,
            AppError::Config(_) => 500,
        }
    }

    /// 获取用户友好的错误消息（不包含内部细节）
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(_) => "Configuration error".to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::InvalidPageSize(_) => "Page size must be at least 1".to_string(),
            AppError::InvalidDate(_) => "Invalid date".to_string(),
            AppError::InvalidDateRange { .. } => {
                "End date must not be before start date".to_string()
            }
            AppError::Forbidden { .. } => "Access denied".to_string(),
        }
    }
}

/// 从 config::ConfigError 转换
impl From<config::ConfigError> for AppError {
    fn from(e: config::ConfigError) -> Self {
        AppError::Config(e.to_string())
    }
}

/// 从 validator::ValidationErrors 转换
impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
