//! 测试公共模块
//! 提供测试辅助函数和测试数据

#![allow(dead_code)]

use erp_core::{
    config::{AppConfig, LoggingConfig, PaginationConfig},
    models::PermissionSet,
};

/// 创建测试配置
pub fn create_test_config() -> AppConfig {
    AppConfig {
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        pagination: PaginationConfig {
            default_page_size: 10,
            max_page_size: 100,
        },
    }
}

/// 发票列表中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceRow {
    pub number: String,
    pub due_date: String,
}

/// 生成 n 条测试发票，到期日从 2024-01-01 起逐日递增
pub fn create_test_invoices(n: usize) -> Vec<InvoiceRow> {
    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    (0..n)
        .map(|i| InvoiceRow {
            number: format!("INV-{:04}", i + 1),
            due_date: (start + chrono::Days::new(i as u64)).to_string(),
        })
        .collect()
}

/// 构造持有权限集合
pub fn held(codes: &[&str]) -> PermissionSet {
    codes.iter().copied().collect()
}

/// 常见角色的权限集合
pub fn admin_permissions() -> PermissionSet {
    held(&["*"])
}

pub fn accountant_permissions() -> PermissionSet {
    held(&["accounting.*", "invoices.view", "collections.view"])
}

pub fn employee_permissions() -> PermissionSet {
    held(&["hr.leave.request", "hr.attendance.view"])
}
