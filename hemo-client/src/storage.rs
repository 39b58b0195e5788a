//! Durable client storage
//!
//! String-keyed store mirroring the credential and the cached identity
//! across restarts. It is a convenience cache; the backend stays
//! authoritative.

use crate::error::StorageResult;
use dashmap::DashMap;
use std::fmt::Debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Bearer credential
pub const TOKEN_KEY: &str = "blood_donation_token";

/// Serialized [`shared::User`] of the logged-in account
pub const CURRENT_USER_KEY: &str = "blood_donation_current_user";

/// Key/value storage backend
pub trait SessionStore: Debug + Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    /// Removing a missing key is a no-op
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// One file per key under a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Ensure the directory exists
    fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read session entry");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.ensure_dir()?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Process-local store; nothing survives a restart
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|v| v.value().clone())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Write and log on failure; storage errors never fail a request
pub(crate) fn set_or_warn(store: &dyn SessionStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        tracing::warn!(key, error = %e, "Failed to persist session entry");
    }
}

/// Remove and log on failure
pub(crate) fn remove_or_warn(store: &dyn SessionStore, key: &str) {
    if let Err(e) = store.remove(key) {
        tracing::warn!(key, error = %e, "Failed to remove session entry");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("session"));

        assert!(store.get(TOKEN_KEY).is_none());
        store.set(TOKEN_KEY, "abc").unwrap();
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"));

        // survives a new handle on the same directory
        let reopened = FileStore::new(store.dir());
        assert_eq!(reopened.get(TOKEN_KEY).as_deref(), Some("abc"));

        store.remove(TOKEN_KEY).unwrap();
        assert!(store.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn test_file_store_remove_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        store.remove(CURRENT_USER_KEY).unwrap();
    }

    #[test]
    fn test_file_store_unreadable_entry() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        // a directory where the entry file should be cannot be read
        std::fs::create_dir(temp_dir.path().join(TOKEN_KEY)).unwrap();
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(CURRENT_USER_KEY).is_none());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        store.set(CURRENT_USER_KEY, "{}").unwrap();
        assert!(store.contains(CURRENT_USER_KEY));
        store.remove(CURRENT_USER_KEY).unwrap();
        assert!(!store.contains(CURRENT_USER_KEY));
        assert!(store.get(CURRENT_USER_KEY).is_none());
    }
}
