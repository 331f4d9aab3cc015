//! 权限检查服务
//!
//! 匹配规则（按顺序短路）：
//! 1. 持有 `*` 时放行所有权限
//! 2. 持有与所需权限完全相同的权限码
//! 3. 持有 `prefix.*` 且所需权限以 `prefix.` 开头
//!
//! 通配只在授予侧生效，所需权限为 `*` 时按字面量比较。
//! 命名空间通配只去掉末尾的 `.*`，不支持 `a.*.b` 之类的多段通配。

use crate::{
    error::{AppError, Result},
    models::permission::{PermissionSet, GLOBAL_WILDCARD, NAMESPACE_WILDCARD_SUFFIX},
};

/// 检查用户是否拥有权限
pub fn has_permission(held: &PermissionSet, required: &str) -> bool {
    if held.contains(GLOBAL_WILDCARD) {
        return true;
    }

    if held.contains(required) {
        return true;
    }

    held.iter().any(|granted| namespace_wildcard_matches(granted, required))
}

/// 单个授予权限码是否以命名空间通配覆盖所需权限
pub fn namespace_wildcard_matches(granted: &str, required: &str) -> bool {
    match granted.strip_suffix(NAMESPACE_WILDCARD_SUFFIX) {
        Some(prefix) => required
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('.')),
        None => false,
    }
}

/// 满足其中任意一个权限即可；列表为空时返回 false
pub fn has_any_permission(held: &PermissionSet, required: &[&str]) -> bool {
    required.iter().any(|code| has_permission(held, code))
}

/// 必须满足全部权限；列表为空时返回 true
pub fn has_all_permissions(held: &PermissionSet, required: &[&str]) -> bool {
    required.iter().all(|code| has_permission(held, code))
}

/// 检查权限，如果无权限则返回错误
pub fn require_permission(held: &PermissionSet, required: &str) -> Result<()> {
    if !has_permission(held, required) {
        tracing::warn!(
            required = %required,
            held = held.len(),
            "Permission denied"
        );
        return Err(AppError::Forbidden {
            required: required.to_string(),
        });
    }

    Ok(())
}

/// 过滤出当前用户可见的条目（如导航菜单）
///
/// `required_of` 返回 `None` 表示该条目无需权限。
pub fn filter_permitted<T, F>(items: Vec<T>, held: &PermissionSet, required_of: F) -> Vec<T>
where
    F: Fn(&T) -> Option<&str>,
{
    items
        .into_iter()
        .filter(|item| required_of(item).map_or(true, |code| has_permission(held, code)))
        .collect()
}
