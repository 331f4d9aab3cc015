//! 请假天数与逾期天数计算
//!
//! 所有计算按自然日进行，不考虑时区；非法输入一律返回 0。

use chrono::{Local, NaiveDate};

use crate::models::calendar::AgingBucket;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// 解析 `YYYY-MM-DD`，允许首尾空白以及 `T`/空格之后的时间部分
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    let date_part = match trimmed.get(..10) {
        Some(prefix) if trimmed[10..].starts_with(['T', ' ']) => prefix,
        _ => trimmed,
    };

    match NaiveDate::parse_from_str(date_part, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::debug!(input = %input, error = %e, "Unparseable calendar date");
            None
        }
    }
}

/// 包含首尾两天的请假天数
///
/// 同一天为 1 天；结束日期早于开始日期或任一日期无法解析时为 0。
pub fn calculate_inclusive_days(start: &str, end: &str) -> u64 {
    let (Some(start), Some(end)) = (parse_calendar_date(start), parse_calendar_date(end)) else {
        return 0;
    };

    let diff = (end - start).num_days();
    if diff < 0 {
        return 0;
    }

    diff as u64 + 1
}

/// 截至 `today` 已逾期的整天数，未到期为 0
pub fn days_overdue_at(due_date: &str, today: NaiveDate) -> u64 {
    match parse_calendar_date(due_date) {
        Some(due) => (today - due).num_days().max(0) as u64,
        None => 0,
    }
}

/// 按本地当前日期计算逾期天数
pub fn days_overdue(due_date: &str) -> u64 {
    days_overdue_at(due_date, Local::now().date_naive())
}

/// 账龄报表中的分组
pub fn aging_bucket_at(due_date: &str, today: NaiveDate) -> AgingBucket {
    AgingBucket::from_days_overdue(days_overdue_at(due_date, today))
}
