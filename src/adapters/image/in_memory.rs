//! Image source backed by bytes already in memory (camera capture, upload body).

use async_trait::async_trait;

use crate::ports::{ImageReadError, ImageSource};

#[derive(Debug, Clone)]
pub struct InMemoryImageSource {
    label: String,
    mime_type: String,
    bytes: Option<Vec<u8>>,
}

impl InMemoryImageSource {
    pub fn new(label: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            label: label.into(),
            mime_type: mime_type.into(),
            bytes: Some(bytes),
        }
    }

    /// A source whose content can no longer be read (e.g. revoked capture).
    pub fn unreadable(label: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            mime_type: mime_type.into(),
            bytes: None,
        }
    }
}

#[async_trait]
impl ImageSource for InMemoryImageSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, ImageReadError> {
        self.bytes
            .clone()
            .ok_or_else(|| ImageReadError::Io(format!("{} is no longer readable", self.label)))
    }
}
