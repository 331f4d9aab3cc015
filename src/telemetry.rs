//! 日志与追踪系统
//!
//! 配置中的日志级别只作用于本库（`erp_core`），其余 target 固定为 warn，
//! 这样分页收缩、权限拒绝等调试日志不会被依赖库的输出淹没。
//! `RUST_LOG` 存在时完全覆盖这一规则。

use crate::config::{AppConfig, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// 依赖库的默认日志级别
const DEPENDENCY_LEVEL: &str = "warn";

/// 根据配置生成过滤指令，例如 `warn,erp_core=debug`
pub fn log_directives(logging: &LoggingConfig) -> String {
    format!(
        "{},{}={}",
        DEPENDENCY_LEVEL,
        env!("CARGO_CRATE_NAME"),
        logging.level.to_lowercase()
    )
}

/// 初始化日志与追踪系统
///
/// 返回是否由本次调用安装了全局 subscriber；已安装时保留原有的，不会 panic。
pub fn init_telemetry(config: &AppConfig) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directives(&config.logging)));

    let log_layer = match config.logging.format.to_lowercase().as_str() {
        // 交给 REST 网关日志采集
        "json" => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(false)
            .boxed(),
        // 本地开发
        "pretty" => tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(false)
            .boxed(),
        _ => tracing_subscriber::fmt::layer().compact().boxed(),
    };

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(log_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            directives = %log_directives(&config.logging),
            format = %config.logging.format,
            "erp-core telemetry initialized"
        );
    }

    installed
}
