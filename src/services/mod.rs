//! Business logic services layer

pub mod calendar;
pub mod pagination;
pub mod permission_service;

pub use calendar::{calculate_inclusive_days, days_overdue, days_overdue_at};
pub use pagination::ClientPaginator;
pub use permission_service::{
    has_all_permissions, has_any_permission, has_permission, require_permission,
};
