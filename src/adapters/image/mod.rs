//! Image adapters.
//!
//! - `FileImageSource` / `InMemoryImageSource` - implementations of the `ImageSource` port
//! - `encode_image` - reads a source and produces base64 text for inline transmission

mod codec;
mod file_source;
mod in_memory;

pub use codec::{encode_image, strip_data_uri_header, CodecError, EncodedImage};
pub use file_source::FileImageSource;
pub use in_memory::InMemoryImageSource;
