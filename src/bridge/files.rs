use std::path::{Path, PathBuf};

use reqwest::multipart::Part;
use tracing::debug;

use crate::bridge::error::{BridgeError, BridgeResult};

/// 调用方没有提供 MIME 类型时使用的默认值
pub const DEFAULT_MIME_TYPE: &str = "application/pdf";

/// 本地文件引用
///
/// 内存中的数据与路径引用两种形态，在构建 multipart 时统一转换为一个二进制 part。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalFile {
    Blob {
        data: Vec<u8>,
        name: String,
        mime_type: String,
    },
    PathRef {
        uri: String,
        name: String,
        mime_type: String,
    },
}

impl LocalFile {
    pub fn blob(data: impl Into<Vec<u8>>, name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        LocalFile::Blob {
            data: data.into(),
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn path_ref(uri: impl Into<String>, name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        LocalFile::PathRef {
            uri: uri.into(),
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }

    /// 根据本地路径构造引用，文件名取路径最后一段，MIME 按扩展名推断
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or(DEFAULT_MIME_TYPE)
            .to_string();
        LocalFile::path_ref(path.to_string_lossy().into_owned(), name, mime_type)
    }

    pub fn name(&self) -> &str {
        match self {
            LocalFile::Blob { name, .. } | LocalFile::PathRef { name, .. } => name,
        }
    }

    /// 空的 MIME 类型回落到 `application/pdf`
    pub fn mime_type(&self) -> &str {
        let mime = match self {
            LocalFile::Blob { mime_type, .. } | LocalFile::PathRef { mime_type, .. } => mime_type,
        };
        if mime.trim().is_empty() {
            DEFAULT_MIME_TYPE
        } else {
            mime.trim()
        }
    }

    /// 读取文件内容
    pub async fn read_bytes(&self) -> BridgeResult<Vec<u8>> {
        match self {
            LocalFile::Blob { data, .. } => Ok(data.clone()),
            LocalFile::PathRef { uri, .. } => {
                let path = uri_to_path(uri);
                debug!("读取本地文件: {:?}", path);
                tokio::fs::read(&path).await.map_err(|source| BridgeError::FileRead {
                    path: uri.clone(),
                    source,
                })
            }
        }
    }

    /// 转换为 multipart 的二进制 part
    pub async fn into_part(self) -> BridgeResult<Part> {
        let data = self.read_bytes().await?;
        let name = self.name().to_string();
        let mime_type = self.mime_type().to_string();
        Part::bytes(data)
            .file_name(name)
            .mime_str(&mime_type)
            .map_err(BridgeError::Transport)
    }
}

/// `file://` URI 去掉前缀并做百分号解码，其余按普通路径处理
fn uri_to_path(uri: &str) -> PathBuf {
    match uri.strip_prefix("file://") {
        Some(raw) => match urlencoding::decode(raw) {
            Ok(decoded) => PathBuf::from(decoded.into_owned()),
            Err(_) => PathBuf::from(raw),
        },
        None => PathBuf::from(uri),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_mime_defaults_to_pdf() {
        let file = LocalFile::blob(b"%PDF".to_vec(), "notes.pdf", "");
        assert_eq!(file.mime_type(), "application/pdf");

        let file = LocalFile::path_ref("/tmp/a.png", "a.png", "image/png");
        assert_eq!(file.mime_type(), "image/png");
    }

    #[test]
    fn test_from_path_guesses_mime() {
        let file = LocalFile::from_path(Path::new("/data/lecture 1.pdf"));
        assert_eq!(file.name(), "lecture 1.pdf");
        assert_eq!(file.mime_type(), "application/pdf");

        let file = LocalFile::from_path(Path::new("/data/README"));
        assert_eq!(file.mime_type(), DEFAULT_MIME_TYPE);
    }

    #[test]
    fn test_uri_to_path_strips_scheme() {
        assert_eq!(uri_to_path("file:///tmp/my%20notes.pdf"), PathBuf::from("/tmp/my notes.pdf"));
        assert_eq!(uri_to_path("/tmp/notes.pdf"), PathBuf::from("/tmp/notes.pdf"));
    }

    #[tokio::test]
    async fn test_path_ref_reads_from_disk() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"lecture notes").unwrap();
        let uri = format!("file://{}", tmp.path().display());

        let file = LocalFile::path_ref(uri, "notes.pdf", "application/pdf");
        assert_eq!(file.read_bytes().await.unwrap(), b"lecture notes".to_vec());
    }

    #[tokio::test]
    async fn test_missing_path_ref_is_file_read_error() {
        let file = LocalFile::path_ref("/definitely/not/here.pdf", "here.pdf", "");
        let err = file.read_bytes().await.unwrap_err();
        assert!(matches!(err, BridgeError::FileRead { .. }));
    }
}
