//! Image codec - binary image to base64 text for inline transmission.
//!
//! Output uses the standard alphabet with padding and carries no
//! `data:<mime>;base64,` header. No size or format validation is done here.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ports::{ImageReadError, ImageSource};

/// Base64 image text paired with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedImage {
    pub data: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Failed to read image '{label}': {source}")]
    DecodeFailure {
        label: String,
        #[source]
        source: ImageReadError,
    },
}

/// Reads the full content of `source` and base64-encodes it.
///
/// # Errors
///
/// Returns `CodecError::DecodeFailure` if the source cannot be read.
pub async fn encode_image(source: &dyn ImageSource) -> Result<EncodedImage, CodecError> {
    let bytes = source
        .read_bytes()
        .await
        .map_err(|source_err| CodecError::DecodeFailure {
            label: source.label().to_string(),
            source: source_err,
        })?;

    Ok(EncodedImage {
        data: STANDARD.encode(bytes),
        mime_type: source.mime_type().to_string(),
    })
}

/// Removes a leading `data:<mime>;base64,` header, if present.
pub fn strip_data_uri_header(text: &str) -> &str {
    if !text.starts_with("data:") {
        return text;
    }
    match text.find(";base64,") {
        Some(idx) => &text[idx + ";base64,".len()..],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::image::InMemoryImageSource;

    #[tokio::test]
    async fn encodes_with_standard_padded_alphabet() {
        let source = InMemoryImageSource::new("a.png", "image/png", vec![0xfb, 0xff, 0x01]);
        let encoded = encode_image(&source).await.unwrap();

        assert_eq!(encoded.data, "+/8B");
        assert_eq!(encoded.mime_type, "image/png");

        let source = InMemoryImageSource::new("b.png", "image/png", b"hi".to_vec());
        assert_eq!(encode_image(&source).await.unwrap().data, "aGk=");
    }

    #[tokio::test]
    async fn empty_image_encodes_to_empty_text() {
        let source = InMemoryImageSource::new("empty.jpg", "image/jpeg", vec![]);
        assert_eq!(encode_image(&source).await.unwrap().data, "");
    }

    #[tokio::test]
    async fn unreadable_source_is_decode_failure() {
        let source = InMemoryImageSource::unreadable("gone.jpg", "image/jpeg");
        let err = encode_image(&source).await.unwrap_err();

        assert!(matches!(err, CodecError::DecodeFailure { ref label, .. } if label == "gone.jpg"));
    }

    #[test]
    fn strips_data_uri_header_only_when_present() {
        assert_eq!(strip_data_uri_header("data:image/png;base64,aGk="), "aGk=");
        assert_eq!(strip_data_uri_header("aGk="), "aGk=");
        assert_eq!(strip_data_uri_header("data:text/plain,hello"), "data:text/plain,hello");
    }
}
