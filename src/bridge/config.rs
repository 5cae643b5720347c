use serde::Deserialize;
use std::time::Duration;

/// 后端桥接配置
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_upload_api_path")]
    pub upload_api_path: String,
    #[serde(default = "default_chat_api_path")]
    pub chat_api_path: String,
    #[serde(default = "default_status_api_path")]
    pub status_api_path: String,
    /// 为空或为 0 时不设置超时，完全交给底层连接
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_upload_error_message")]
    pub upload_error_message: String,
    #[serde(default = "default_chat_error_message")]
    pub chat_error_message: String,
    #[serde(default = "default_status_error_message")]
    pub status_error_message: String,
}

impl BridgeConfig {
    /// 仅指定后端地址，其余使用默认值
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    /// 拼接完整的接口地址，忽略 base url 末尾多余的斜杠
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// 实际生效的超时，0 视为未设置
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout_secs.filter(|secs| *secs > 0).map(Duration::from_secs)
    }

    pub fn upload_url(&self) -> String {
        self.endpoint(&self.upload_api_path)
    }

    pub fn chat_url(&self) -> String {
        self.endpoint(&self.chat_api_path)
    }

    pub fn status_url(&self) -> String {
        self.endpoint(&self.status_api_path)
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            upload_api_path: default_upload_api_path(),
            chat_api_path: default_chat_api_path(),
            status_api_path: default_status_api_path(),
            timeout_secs: None,
            upload_error_message: default_upload_error_message(),
            chat_error_message: default_chat_error_message(),
            status_error_message: default_status_error_message(),
        }
    }
}

fn default_api_base_url() -> String {
    "http://192.168.1.8:5000".to_string()
}

fn default_upload_api_path() -> String {
    "/upload".to_string()
}

fn default_chat_api_path() -> String {
    "/chat".to_string()
}

fn default_status_api_path() -> String {
    "/".to_string()
}

fn default_upload_error_message() -> String {
    "Network request failed. Is the python backend running?".to_string()
}

fn default_chat_error_message() -> String {
    "Could not connect to AI.".to_string()
}

fn default_status_error_message() -> String {
    "Backend is unreachable.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_ignores_trailing_slash() {
        let config = BridgeConfig::with_base_url("http://localhost:5000/");
        assert_eq!(config.upload_url(), "http://localhost:5000/upload");
        assert_eq!(config.chat_url(), "http://localhost:5000/chat");
        assert_eq!(config.status_url(), "http://localhost:5000/");
    }

    #[test]
    fn test_endpoint_without_leading_slash() {
        let config = BridgeConfig::with_base_url("http://localhost:5000");
        assert_eq!(config.endpoint("chat"), "http://localhost:5000/chat");
    }

    #[test]
    fn test_default_has_no_timeout() {
        let config = BridgeConfig::default();
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.api_base_url, "http://192.168.1.8:5000");
    }

    #[test]
    fn test_zero_timeout_means_no_timeout() {
        let mut config = BridgeConfig::default();
        config.timeout_secs = Some(0);
        assert_eq!(config.request_timeout(), None);

        config.timeout_secs = Some(30);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
    }
}
