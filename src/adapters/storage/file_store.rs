//! File-based Key-Value Store Adapter
//!
//! Stores each key as `<data_dir>/<key>.json`. Writes go to a temp file
//! first and are renamed into place so a failed write never leaves a
//! truncated document behind.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::ports::{KeyValueStore, StoreError};

#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn file_path(&self, key: &str) -> Result<PathBuf, String> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(format!("invalid key '{}'", key));
        }
        Ok(self.base_dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self
            .file_path(key)
            .map_err(|reason| StoreError::read_failed(key, reason))?;

        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::read_failed(key, e.to_string())),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self
            .file_path(key)
            .map_err(|reason| StoreError::write_failed(key, reason))?;

        fs::create_dir_all(&self.base_dir).map_err(|e| {
            StoreError::write_failed(key, format!("Failed to create directory: {}", e))
        })?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value).map_err(|e| {
            StoreError::write_failed(key, format!("Failed to write temp file: {}", e))
        })?;

        fs::rename(&temp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::write_failed(key, format!("Failed to rename file: {}", e))
        })?;

        tracing::debug!(key, path = %path.display(), "stored value");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());
        assert_eq!(store.read("skinScanAnalyses").unwrap(), None);
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("nested"));

        store.write("skinScanAnalyses", "[]").unwrap();
        assert_eq!(
            store.read("skinScanAnalyses").unwrap().as_deref(),
            Some("[]")
        );
        assert!(temp_dir.path().join("nested/skinScanAnalyses.json").exists());
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        store.write("k", "one").unwrap();
        store.write("k", "two").unwrap();

        assert_eq!(store.read("k").unwrap().as_deref(), Some("two"));
        assert!(!temp_dir.path().join("k.json.tmp").exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        assert!(matches!(
            store.write("../escape", "x"),
            Err(StoreError::WriteFailed { .. })
        ));
        assert!(matches!(
            store.read(""),
            Err(StoreError::ReadFailed { .. })
        ));
    }
}
