//! 数据模型模块

pub mod calendar;
pub mod pagination;
pub mod permission;

pub use calendar::{AgingBucket, DateRange};
pub use pagination::{PageControls, PageInfo, PageQuery};
pub use permission::{PermissionCode, PermissionSet};
