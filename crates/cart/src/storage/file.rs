//! File-backed storage backend.
//!
//! One file per key under a root directory. Writes go to a temp file and
//! rename over the record, so a reader (or a crash mid-write) never observes
//! a partial record.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::{Storage, StorageError};

/// Durable key-value storage rooted at a directory on the local device.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a key onto a file path inside the root.
    ///
    /// Keys are namespaced strings like `pocket-market:cart`; characters
    /// that are unsafe in file names are replaced with `-`.
    fn record_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.trim().is_empty() {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        Ok(self.root.join(format!("{name}.json")))
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.record_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let path = self.record_path(key)?;
        fs::create_dir_all(&self.root).await?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_absent_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.get("pocket-market:cart").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        storage
            .set("pocket-market:cart", "[]".to_string())
            .await
            .unwrap();
        assert_eq!(
            storage.get("pocket-market:cart").await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn test_value_survives_a_new_handle() {
        let dir = tempfile::tempdir().unwrap();
        {
            let storage = FileStorage::new(dir.path());
            storage
                .set("pocket-market:cart", "[1]".to_string())
                .await
                .unwrap();
        }
        let reopened = FileStorage::new(dir.path());
        assert_eq!(
            reopened.get("pocket-market:cart").await.unwrap().as_deref(),
            Some("[1]")
        );
    }

    #[tokio::test]
    async fn test_key_is_sanitized_into_a_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.set("a:b/c", "v".to_string()).await.unwrap();
        assert!(dir.path().join("a-b-c.json").exists());
    }

    #[tokio::test]
    async fn test_empty_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(matches!(
            storage.get("  ").await,
            Err(StorageError::InvalidKey(_))
        ));
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.set("k", "v".to_string()).await.unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("k.json")]);
    }
}
