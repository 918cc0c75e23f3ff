//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the core to external systems:
//! - `ai` - Inference service implementations (Gemini, mock)
//! - `image` - Image sources and the base64 codec
//! - `storage` - Key-value stores (in-memory, filesystem)

pub mod ai;
pub mod image;
pub mod storage;

pub use ai::{GeminiConfig, GeminiProvider, MockInferenceService};
pub use image::{encode_image, EncodedImage, FileImageSource, InMemoryImageSource};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
