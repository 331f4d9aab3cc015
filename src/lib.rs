//! ERP 前端核心工具库
//! 提供权限判定、客户端分页与请假天数计算

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod telemetry;

pub use error::{AppError, Result};
