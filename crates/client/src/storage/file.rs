//! File-backed storage backend.
//!
//! A single JSON object of key→value strings on disk, loaded once on open
//! and rewritten on every mutation. This is the CLI's stand-in for
//! per-origin browser storage.
//!
//! Concurrent processes pointing at the same file interleave their
//! read-modify-write cycles without coordination and can clobber each
//! other's updates — the same consistency model as two browser tabs sharing
//! one origin. Callers that need coordination don't get it here.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::storage::{Storage, StorageError};

/// Storage persisted as a JSON file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStorage {
    /// Open (or create) storage at `path`.
    ///
    /// A missing file starts empty. An unreadable or malformed file also
    /// starts empty: stored state is a cache of user convenience, never
    /// worth a crash.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let values = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Malformed storage file, starting empty");
                HashMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(StorageError::Io(e)),
        };

        Ok(Self { path, values })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StorageError> {
        let contents = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.values.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_storage_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("shopwindow.json")
    }

    #[test]
    fn test_roundtrip_across_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = temp_storage_path(&dir);

        {
            let mut storage = FileStorage::open(&path).expect("open");
            storage.set("cart", "[3,3,5]").expect("set");
            storage.set("token", "abc").expect("set");
        }

        let storage = FileStorage::open(&path).expect("reopen");
        assert_eq!(storage.get("cart"), Some("[3,3,5]".to_string()));
        assert_eq!(storage.get("token"), Some("abc".to_string()));
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::open(temp_storage_path(&dir)).expect("open");
        assert_eq!(storage.get("cart"), None);
    }

    #[test]
    fn test_malformed_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = temp_storage_path(&dir);
        fs::write(&path, "not json at all {{{").expect("write");

        let storage = FileStorage::open(&path).expect("open");
        assert_eq!(storage.get("token"), None);
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = temp_storage_path(&dir);

        {
            let mut storage = FileStorage::open(&path).expect("open");
            storage.set("favorites", "[1,2]").expect("set");
            storage.remove("favorites").expect("remove");
        }

        let storage = FileStorage::open(&path).expect("reopen");
        assert_eq!(storage.get("favorites"), None);
    }

    #[test]
    fn test_creates_parent_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/dirs/shopwindow.json");

        let mut storage = FileStorage::open(&path).expect("open");
        storage.set("token", "t").expect("set");
        assert!(path.exists());
    }
}
