use regex::Regex;
use std::sync::LazyLock;

static EXTENSION_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9]{1,20}$").expect("extension name pattern is valid")
});

/// 校验扩展名语法
/// 只允许1-20个ASCII字母或数字，不允许空白
pub fn is_valid_extension_name(name: &str) -> bool {
    if name.trim().is_empty() {
        return false;
    }
    EXTENSION_NAME.is_match(name)
}

/// 扩展名统一转为小写后再存储或查询
pub fn normalize_extension_name(name: &str) -> String {
    name.to_lowercase()
}
