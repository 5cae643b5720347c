use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::bridge::files::LocalFile;

/// 未指定科目时使用的默认科目
pub const DEFAULT_SUBJECT: &str = "General";
/// 后端按此科目切换到校园导航模式
pub const CAMPUS_SUBJECT: &str = "Campus";

/// 课程资料上传请求
#[derive(Debug, Clone)]
pub struct MaterialUploadRequest {
    pub file: LocalFile,
    pub subject: String,
    pub professor: String,
}

impl MaterialUploadRequest {
    pub fn new(file: LocalFile, subject: impl Into<String>, professor: impl Into<String>) -> Self {
        Self {
            file,
            subject: subject.into(),
            professor: professor.into(),
        }
    }
}

/// 上传接口响应，字段原样来自服务器
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// 非整数的 id 记为 `None`，不影响其余字段
    #[serde(
        rename = "id",
        default,
        deserialize_with = "lenient_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub record_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadResult {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

/// 接受整数、整数值的浮点数和数字字符串，其余情况返回 `None`
fn lenient_record_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }))
}

/// 对话请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub question: String,
    pub subject: String,
}

impl ChatRequest {
    /// `subject` 为空时回落到 "General"
    pub fn new(question: impl Into<String>, subject: Option<&str>) -> Self {
        Self {
            question: question.into(),
            subject: subject.unwrap_or(DEFAULT_SUBJECT).to_string(),
        }
    }
}

/// 对话接口响应
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResult {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            answer: None,
            error: Some(error.into()),
        }
    }
}

/// 后端存活检查响应
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusResult {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn is_online(&self) -> bool {
        self.error.is_none() && self.status.as_deref() == Some("online")
    }
}
