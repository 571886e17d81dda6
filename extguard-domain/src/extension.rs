use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

/// 扩展名类型
/// check: 固定扩展名（复选框），label: 用户添加的扩展名（标签）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionType {
    Check,
    Label,
}

impl ExtensionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtensionType::Check => "check",
            ExtensionType::Label => "label",
        }
    }
}

impl fmt::Display for ExtensionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown extension type: {0}")]
pub struct ParseExtensionTypeError(pub String);

impl FromStr for ExtensionType {
    type Err = ParseExtensionTypeError;

    /// 只接受完全匹配的小写值
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "check" => Ok(ExtensionType::Check),
            "label" => Ok(ExtensionType::Label),
            other => Err(ParseExtensionTypeError(other.to_string())),
        }
    }
}

/// Extension实体
/// 对应ext表中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Extension {
    /// 由存储层分配的自增ID
    pub idx: i32,

    #[serde(rename = "type")]
    pub kind: ExtensionType,

    /// 小写的扩展名，如 pdf
    pub name: String,

    #[serde(rename = "regId")]
    pub registered_by: Option<String>,

    #[serde(rename = "regDate")]
    pub registered_at: DateTime<Utc>,

    #[serde(rename = "modId")]
    pub modified_by: Option<String>,

    #[serde(rename = "modDate")]
    pub modified_at: Option<DateTime<Utc>>,
}

/// 待插入的扩展名记录
/// idx由存储层分配
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExtension {
    pub kind: ExtensionType,
    pub name: String,
    pub registered_by: String,
    pub registered_at: DateTime<Utc>,
}
