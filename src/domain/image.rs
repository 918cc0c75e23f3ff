//! Handle to the image the user currently has selected.

use std::fmt;
use std::sync::Arc;

use crate::ports::ImageSource;

/// Cheap-to-clone reference to a selected image resource.
///
/// The state machines only record *that* an image is selected; reading and
/// encoding it happens in the application layer when an effect runs.
#[derive(Clone)]
pub struct SelectedImage {
    source: Arc<dyn ImageSource>,
}

impl SelectedImage {
    pub fn new(source: impl ImageSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    pub fn from_shared(source: Arc<dyn ImageSource>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &dyn ImageSource {
        self.source.as_ref()
    }

    pub fn label(&self) -> &str {
        self.source.label()
    }

    pub fn mime_type(&self) -> &str {
        self.source.mime_type()
    }
}

impl fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedImage")
            .field("label", &self.label())
            .field("mime_type", &self.mime_type())
            .finish()
    }
}
