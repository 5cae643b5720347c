use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::bridge::BridgeConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub bridge: BridgeConfig,
}

impl AppConfig {
    /// 读取配置文件，文件不存在时使用默认配置
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = config_path.unwrap_or_else(|| Path::new("config.toml"));
        if path.exists() {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
            return Self::from_toml(&raw)
                .with_context(|| format!("解析配置文件失败: {}", path.display()));
        }
        Ok(AppConfig::default())
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let cfg: AppConfig = toml::from_str(raw)?;
        Ok(cfg)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            bridge: BridgeConfig::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let cfg = AppConfig::load(Some(Path::new("/no/such/navi.toml"))).unwrap();
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.bridge.api_base_url, "http://192.168.1.8:5000");
    }

    #[test]
    fn test_partial_bridge_section() {
        let cfg = AppConfig::from_toml(
            r#"
            log_level = "debug"

            [bridge]
            api_base_url = "http://10.0.0.5:5000/"
            timeout_secs = 30
            "#,
        )
        .unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.bridge.timeout_secs, Some(30));
        assert_eq!(cfg.bridge.chat_url(), "http://10.0.0.5:5000/chat");
        assert_eq!(cfg.bridge.chat_error_message, "Could not connect to AI.");
    }

    #[test]
    fn test_load_from_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "[bridge]\nupload_api_path = \"/materials\"").unwrap();

        let cfg = AppConfig::load(Some(tmp.path())).unwrap();
        assert_eq!(cfg.bridge.upload_url(), "http://192.168.1.8:5000/materials");
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "bridge = 3").unwrap();

        let err = AppConfig::load(Some(tmp.path())).unwrap_err();
        assert!(err.to_string().contains("解析配置文件失败"));
    }
}
