//! Image Source Port - a user-supplied image resource.

use async_trait::async_trait;

/// Errors that can occur while reading an image resource
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageReadError {
    #[error("Image not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// A binary image the user picked (file, camera capture, upload).
///
/// Reading is the only operation that can suspend or fail; no size or format
/// checks are made at this level.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Human-readable name (usually the file name).
    fn label(&self) -> &str;

    /// MIME type reported for the resource (e.g. `image/jpeg`).
    fn mime_type(&self) -> &str;

    /// Read the full binary content.
    async fn read_bytes(&self) -> Result<Vec<u8>, ImageReadError>;
}
