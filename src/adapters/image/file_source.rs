//! Image source backed by a file on disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::ports::{ImageReadError, ImageSource};

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone)]
pub struct FileImageSource {
    path: PathBuf,
    label: String,
    mime_type: String,
}

impl FileImageSource {
    /// MIME type is inferred from the file extension.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let mime_type = mime_type_for(&path).to_string();
        Self::with_mime_type(path, mime_type)
    }

    pub fn with_mime_type(path: impl AsRef<Path>, mime_type: impl Into<String>) -> Self {
        let path = path.as_ref().to_path_buf();
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path,
            label,
            mime_type: mime_type.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        Some("heif") => "image/heif",
        _ => FALLBACK_MIME_TYPE,
    }
}

#[async_trait]
impl ImageSource for FileImageSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, ImageReadError> {
        fs::read(&self.path).await.map_err(|e| {
            let path = self.path.display().to_string();
            match e.kind() {
                ErrorKind::NotFound => ImageReadError::NotFound(path),
                ErrorKind::PermissionDenied => ImageReadError::PermissionDenied(path),
                _ => ImageReadError::Io(format!("{}: {}", path, e)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_mime_type_from_extension() {
        assert_eq!(FileImageSource::new("me.JPG").mime_type(), "image/jpeg");
        assert_eq!(FileImageSource::new("/tmp/me.png").mime_type(), "image/png");
        assert_eq!(FileImageSource::new("scan.webp").mime_type(), "image/webp");
        assert_eq!(
            FileImageSource::new("notes").mime_type(),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_label_is_file_name() {
        assert_eq!(FileImageSource::new("/a/b/selfie.jpg").label(), "selfie.jpg");
    }

    #[tokio::test]
    async fn test_reads_file_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("selfie.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let source = FileImageSource::new(&path);
        assert_eq!(source.read_bytes().await.unwrap(), vec![0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileImageSource::new(temp_dir.path().join("gone.jpg"));

        assert!(matches!(
            source.read_bytes().await,
            Err(ImageReadError::NotFound(_))
        ));
    }
}
