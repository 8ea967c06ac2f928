//! String-keyed local storage
//!
//! The collection and the theme preference live in a flat key/value area
//! where both keys and values are strings. [`FileStorage`] keeps that area
//! in a single JSON object on disk; [`MemoryStorage`] keeps it in memory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A flat string-to-string storage area
pub trait Storage {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing whatever was there
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Errors raised when writing to storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write storage file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode storage contents: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("storage is read-only")]
    ReadOnly,
}

/// Storage area persisted as one JSON object in a file
///
/// A missing or unreadable file is an empty area. Every write replaces the
/// whole file through a temporary sibling and a rename.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the storage file at `path`
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self { path, entries }
    }

    /// Location of the storage file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// In-memory storage area
///
/// A read-only instance rejects every write, which is how a full or disabled
/// storage area looks to callers.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that accepts reads but fails every write
    pub fn read_only() -> Self {
        Self {
            entries: BTreeMap::new(),
            read_only: true,
        }
    }

    /// Seed a key without going through `set`
    pub fn with_entry(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::ReadOnly);
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::ReadOnly);
        }
        self.entries.remove(key);
        Ok(())
    }
}
