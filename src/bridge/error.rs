use thiserror::Error;

/// 桥接层内部错误，对外统一折叠为结果中的 `error` 字段
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to read local file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl BridgeError {
    /// 校验失败的错误信息可以直接展示给用户，其余错误使用配置中的固定提示
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            BridgeError::InvalidInput(msg) => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

pub type BridgeResult<T> = std::result::Result<T, BridgeError>;
