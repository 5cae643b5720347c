use reqwest::Client;
use reqwest::multipart::Form;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use crate::bridge::config::BridgeConfig;
use crate::bridge::error::{BridgeError, BridgeResult};
use crate::bridge::models::{
    CAMPUS_SUBJECT, ChatRequest, ChatResult, MaterialUploadRequest, StatusResult, UploadResult,
};

/// 后端桥接客户端
///
/// 只持有不可变配置和 `reqwest::Client`，克隆后可在多个任务中并发使用。
/// 公开的 `upload_course_material` / `chat_with_ai` / `check_status` 永远返回结果值，
/// 失败时填充 `error` 字段；对应的 `try_*` 方法返回带类型的 [`BridgeError`]。
#[derive(Debug, Clone)]
pub struct BackendBridge {
    client: Client,
    config: BridgeConfig,
}

impl BackendBridge {
    pub fn new(config: BridgeConfig) -> BridgeResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(BridgeError::Transport)?;
        Ok(Self { client, config })
    }

    /// 使用调用方提供的 client，便于共享连接池
    pub fn with_client(config: BridgeConfig, client: Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// 上传课程资料
    pub async fn upload_course_material(&self, request: MaterialUploadRequest) -> UploadResult {
        self.try_upload_course_material(request)
            .await
            .unwrap_or_else(|e| {
                error!("❌ 上传请求失败: {}", e);
                UploadResult::failed(e.user_message(&self.config.upload_error_message))
            })
    }

    /// 向 AI 提问，`subject` 为空时使用 "General"
    pub async fn chat_with_ai(&self, question: &str, subject: Option<&str>) -> ChatResult {
        let request = ChatRequest::new(question, subject);
        self.try_chat(&request).await.unwrap_or_else(|e| {
            error!("❌ 对话请求失败: {}", e);
            ChatResult::failed(e.user_message(&self.config.chat_error_message))
        })
    }

    /// 校园导航模式
    pub async fn ask_campus_navigator(&self, question: &str) -> ChatResult {
        self.chat_with_ai(question, Some(CAMPUS_SUBJECT)).await
    }

    /// 检查后端是否在线
    pub async fn check_status(&self) -> StatusResult {
        self.try_check_status().await.unwrap_or_else(|e| {
            warn!("后端状态检查失败: {}", e);
            StatusResult::failed(e.user_message(&self.config.status_error_message))
        })
    }

    pub async fn try_upload_course_material(
        &self,
        request: MaterialUploadRequest,
    ) -> BridgeResult<UploadResult> {
        validate_upload(&request)?;

        let url = self.config.upload_url();
        info!("📤 正在上传资料 '{}' 到: {}", request.file.name(), url);
        debug!(
            "科目: {}, 教授: {}, MIME: {}",
            request.subject,
            request.professor,
            request.file.mime_type()
        );

        let MaterialUploadRequest {
            file,
            subject,
            professor,
        } = request;
        let form = Form::new()
            .part("file", file.into_part().await?)
            .text("subject", subject)
            .text("professor", professor);

        // Content-Type 交给 reqwest 设置，需要带上 boundary
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(BridgeError::Transport)?;

        let result: UploadResult = decode_json(response).await?;
        if let Some(err) = &result.error {
            warn!("⚠️ 服务器返回上传错误: {}", err);
        } else {
            info!("✅ 上传完成, id: {:?}", result.record_id);
        }
        Ok(result)
    }

    pub async fn try_chat(&self, request: &ChatRequest) -> BridgeResult<ChatResult> {
        if request.question.trim().is_empty() {
            return Err(BridgeError::InvalidInput("question must not be empty".to_string()));
        }

        let url = self.config.chat_url();
        info!("💬 发送问题到: {} (科目: {})", url, request.subject);
        debug!("问题内容: {}", request.question);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(BridgeError::Transport)?;

        let result: ChatResult = decode_json(response).await?;
        if let Some(err) = &result.error {
            warn!("⚠️ 服务器返回对话错误: {}", err);
        }
        Ok(result)
    }

    pub async fn try_check_status(&self) -> BridgeResult<StatusResult> {
        let url = self.config.status_url();
        debug!("检查后端状态: {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(BridgeError::Transport)?;
        decode_json(response).await
    }
}

fn validate_upload(request: &MaterialUploadRequest) -> BridgeResult<()> {
    if request.file.name().trim().is_empty() {
        return Err(BridgeError::InvalidInput("file name must not be empty".to_string()));
    }
    if request.subject.trim().is_empty() {
        return Err(BridgeError::InvalidInput("subject must not be empty".to_string()));
    }
    if request.professor.trim().is_empty() {
        return Err(BridgeError::InvalidInput("professor must not be empty".to_string()));
    }
    Ok(())
}

/// 不区分状态码，只要响应体是合法 JSON 就原样返回
async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> BridgeResult<T> {
    let status = response.status();
    if !status.is_success() {
        debug!("服务器返回非 2xx 状态: {}", status);
    }
    response.json::<T>().await.map_err(BridgeError::Decode)
}
