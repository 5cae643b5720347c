pub mod app;
pub mod bridge;
pub mod logger;

pub use app::AppConfig;
pub use bridge::{
    BackendBridge, BridgeConfig, BridgeError, ChatResult, LocalFile, MaterialUploadRequest,
    StatusResult, UploadResult,
};
