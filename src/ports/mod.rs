//! Ports - Interfaces between the core and its external collaborators.
//!
//! - `InferenceService` - the generative AI endpoint that analyzes images
//! - `KeyValueStore` - the persistence layer for saved analyses
//! - `ImageSource` - a user-supplied image resource

mod image_source;
mod inference_service;
mod key_value_store;

pub use image_source::{ImageReadError, ImageSource};
pub use inference_service::{
    InferenceError, InferenceRequest, InferenceService, InlineImage, ProviderInfo,
};
pub use key_value_store::{KeyValueStore, StoreError};
