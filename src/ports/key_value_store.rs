//! Key-Value Store Port - the two-operation persistence collaborator.
//!
//! The core never depends on a storage technology: it reads and writes whole
//! text documents under fixed keys. Both operations are synchronous from the
//! caller's point of view.

/// Errors that can occur during store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read key '{key}': {reason}")]
    ReadFailed { key: String, reason: String },

    #[error("Failed to write key '{key}': {reason}")]
    WriteFailed { key: String, reason: String },
}

impl StoreError {
    pub fn read_failed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ReadFailed {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn write_failed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::WriteFailed {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Port for storing text values under string keys
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    /// `None` if nothing has been written under the key
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    /// On failure the previously stored value must be left intact
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_mentions_key() {
        let err = StoreError::write_failed("skinScanAnalyses", "quota exceeded");
        assert_eq!(
            err.to_string(),
            "Failed to write key 'skinScanAnalyses': quota exceeded"
        );
    }
}
