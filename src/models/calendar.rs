//! Date range and aging report models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::services::calendar::parse_calendar_date;

/// 日历日期区间（不含时区，按自然日比较）
///
/// 始终满足 `start <= end`，反序列化也经过 [`DateRange::new`] 校验。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

/// 未校验的区间，仅用于反序列化
#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = AppError;

    fn try_from(raw: RawDateRange) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// 构造区间，结束日期早于开始日期时报错
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(AppError::InvalidDateRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// 严格解析 `YYYY-MM-DD` 字符串
    ///
    /// 与 [`crate::services::calendar::calculate_inclusive_days`] 不同，
    /// 这里对非法输入返回错误，用于提交前的表单校验。
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start_date =
            parse_calendar_date(start).ok_or_else(|| AppError::InvalidDate(start.to_string()))?;
        let end_date =
            parse_calendar_date(end).ok_or_else(|| AppError::InvalidDate(end.to_string()))?;
        Self::new(start_date, end_date)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// 包含首尾两天的天数
    pub fn inclusive_days(&self) -> u64 {
        u64::try_from((self.end - self.start).num_days()).map_or(0, |days| days + 1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// 账龄分组
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgingBucket {
    #[serde(rename = "current")]
    Current,
    #[serde(rename = "1-30")]
    Days1To30,
    #[serde(rename = "31-60")]
    Days31To60,
    #[serde(rename = "61-90")]
    Days61To90,
    #[serde(rename = "90+")]
    Over90,
}

impl AgingBucket {
    pub fn from_days_overdue(days: u64) -> Self {
        match days {
            0 => AgingBucket::Current,
            1..=30 => AgingBucket::Days1To30,
            31..=60 => AgingBucket::Days31To60,
            61..=90 => AgingBucket::Days61To90,
            _ => AgingBucket::Over90,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgingBucket::Current => "current",
            AgingBucket::Days1To30 => "1-30",
            AgingBucket::Days31To60 => "31-60",
            AgingBucket::Days61To90 => "61-90",
            AgingBucket::Over90 => "90+",
        }
    }
}
