pub mod api_client;
pub mod config;
pub mod error;
pub mod files;
pub mod models;

pub use api_client::BackendBridge;
pub use config::BridgeConfig;
pub use error::{BridgeError, BridgeResult};
pub use files::{DEFAULT_MIME_TYPE, LocalFile};
pub use models::{
    CAMPUS_SUBJECT, ChatRequest, ChatResult, DEFAULT_SUBJECT, MaterialUploadRequest, StatusResult,
    UploadResult,
};
