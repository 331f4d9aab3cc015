//! Permission domain models

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// 全局通配权限（超级管理员）
pub const GLOBAL_WILDCARD: &str = "*";

/// 命名空间通配后缀，例如 `accounting.*`
pub const NAMESPACE_WILDCARD_SUFFIX: &str = ".*";

/// Permission code: `namespace.action`, `namespace.*` or `*`
///
/// 任意字符串都可作为权限码，解析永不失败。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionCode(String);

impl PermissionCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 是否为全局通配 `*`
    pub fn is_wildcard(&self) -> bool {
        self.0 == GLOBAL_WILDCARD
    }

    /// 是否为命名空间通配 `prefix.*`
    pub fn is_namespace_wildcard(&self) -> bool {
        self.0.ends_with(NAMESPACE_WILDCARD_SUFFIX)
    }

    /// 命名空间通配去掉 `.*` 后的前缀
    pub fn wildcard_prefix(&self) -> Option<&str> {
        self.0.strip_suffix(NAMESPACE_WILDCARD_SUFFIX)
    }

    /// 第一个 `.` 之前的部分
    pub fn namespace(&self) -> Option<&str> {
        self.0.split_once('.').map(|(ns, _)| ns)
    }

    /// 第一个 `.` 之后的部分
    pub fn action(&self) -> Option<&str> {
        self.0.split_once('.').map(|(_, action)| action)
    }
}

impl fmt::Display for PermissionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PermissionCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for PermissionCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for PermissionCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Held permissions of the current session (unordered, duplicates collapse)
///
/// Serialized as a plain JSON array, matching what the session lookup returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    codes: HashSet<String>,
}

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: impl Into<String>) -> bool {
        self.codes.insert(code.into())
    }

    /// 字面量包含（不做通配展开）
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn is_super_admin(&self) -> bool {
        self.contains(GLOBAL_WILDCARD)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// 见 [`crate::services::permission_service::has_permission`]
    pub fn has(&self, required: &str) -> bool {
        crate::services::permission_service::has_permission(self, required)
    }

    pub fn has_any(&self, required: &[&str]) -> bool {
        crate::services::permission_service::has_any_permission(self, required)
    }

    pub fn has_all(&self, required: &[&str]) -> bool {
        crate::services::permission_service::has_all_permissions(self, required)
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for PermissionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.codes.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_code_parts() {
        let code = PermissionCode::new("accounting.invoices.view");
        assert_eq!(code.namespace(), Some("accounting"));
        assert_eq!(code.action(), Some("invoices.view"));
        assert!(!code.is_wildcard());
        assert!(!code.is_namespace_wildcard());

        let bare = PermissionCode::from("dashboard");
        assert_eq!(bare.namespace(), None);
        assert_eq!(bare.action(), None);
    }

    #[test]
    fn test_permission_code_wildcards() {
        assert!(PermissionCode::from("*").is_wildcard());

        let ns = PermissionCode::from("hr.*");
        assert!(ns.is_namespace_wildcard());
        assert_eq!(ns.wildcard_prefix(), Some("hr"));
        assert_eq!(PermissionCode::from("hr.view").wildcard_prefix(), None);
    }

    #[test]
    fn test_permission_set_collapses_duplicates() {
        let set: PermissionSet = ["users.view", "users.view", "hr.*"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains("users.view"));
        assert!(!set.contains("hr.leave.view"));
        assert!(!set.is_super_admin());
    }

    #[test]
    fn test_permission_set_json_array() {
        let set: PermissionSet = serde_json::from_str(r#"["*", "users.view"]"#).unwrap();
        assert!(set.is_super_admin());
        assert_eq!(set.len(), 2);

        let single: PermissionSet = ["users.view"].into_iter().collect();
        assert_eq!(serde_json::to_string(&single).unwrap(), r#"["users.view"]"#);
    }
}
