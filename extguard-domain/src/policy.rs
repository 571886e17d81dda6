use serde::{Deserialize, Serialize};

/// 未指定登记人时使用的默认值
pub const DEFAULT_REGISTRANT: &str = "system";

/// 默认的危险扩展名列表
pub const DEFAULT_FIXED_EXTENSIONS: [&str; 7] = ["bat", "cmd", "com", "cpl", "exe", "scr", "js"];

/// label类型扩展名的默认上限
pub const DEFAULT_LABEL_LIMIT: usize = 200;

/// 注册表策略
/// 启动时从配置加载，之后只读
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryPolicy {
    pub fixed_extensions: Vec<String>,
    pub label_limit: usize,
}

impl Default for RegistryPolicy {
    fn default() -> Self {
        Self {
            fixed_extensions: DEFAULT_FIXED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            label_limit: DEFAULT_LABEL_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = RegistryPolicy::default();
        assert_eq!(policy.label_limit, 200);
        assert_eq!(policy.fixed_extensions.len(), 7);
        assert!(policy.fixed_extensions.iter().any(|e| e == "exe"));
    }
}
