//! Pagination domain models

use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    10
}

/// 列表分页请求参数
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be >= 1"))]
    pub page: usize,

    /// 上界与 [`crate::config::PAGE_SIZE_CEILING`] 一致
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 1000, message = "page_size must be between 1 and 1000"))]
    pub page_size: usize,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

/// 当前分页状态摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_rows: usize,
    pub has_previous: bool,
    pub has_next: bool,
    /// 当前页第一行的序号（从 1 开始），无数据时为 0
    pub first_row: usize,
    /// 当前页最后一行的序号，无数据时为 0
    pub last_row: usize,
}

/// 上一页 / 下一页按钮的可用状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl PageControls {
    /// 只有一页或数据仍在加载时两个按钮都禁用
    pub fn from_info(info: &PageInfo, loading: bool) -> Self {
        if loading || info.total_pages <= 1 {
            return Self {
                previous_enabled: false,
                next_enabled: false,
            };
        }

        Self {
            previous_enabled: info.has_previous,
            next_enabled: info.has_next,
        }
    }
}
