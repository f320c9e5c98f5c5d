//! Layout persistence sinks.
//!
//! A [`LayoutStore`] keeps layout documents under string keys. The file store
//! writes `<key>.json` files into a directory; the memory store keeps JSON
//! text in slots, like browser local storage.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use seatplan_core::StorageError;

use crate::serialization::LayoutDocument;

/// Keyed storage for layout documents.
pub trait LayoutStore {
    fn save(&mut self, key: &str, document: &LayoutDocument) -> Result<(), StorageError>;

    /// Loads a document, or `None` if nothing is stored under `key`.
    fn load(&self, key: &str) -> Result<Option<LayoutDocument>, StorageError>;

    /// Deletes a stored document. Returns whether anything was deleted.
    fn remove(&mut self, key: &str) -> Result<bool, StorageError>;
}

fn check_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.trim().is_empty()
        && key != "."
        && key != ".."
        && key
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ' '));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey {
            key: key.to_string(),
        })
    }
}

/// Stores layouts as `<key>.json` files in a directory.
#[derive(Debug, Clone)]
pub struct FileLayoutStore {
    directory: PathBuf,
}

impl FileLayoutStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File a key is stored in.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        check_key(key)?;
        Ok(self.directory.join(format!("{}.json", key)))
    }
}

impl LayoutStore for FileLayoutStore {
    fn save(&mut self, key: &str, document: &LayoutDocument) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.directory)?;
        std::fs::write(&path, serde_json::to_string_pretty(document)?)?;
        tracing::debug!("Wrote layout to {}", path.display());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<LayoutDocument>, StorageError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn remove(&mut self, key: &str) -> Result<bool, StorageError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&path)?;
        Ok(true)
    }
}

/// Keeps layouts as JSON text in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLayoutStore {
    slots: HashMap<String, String>,
}

impl MemoryLayoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON stored under `key`.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl LayoutStore for MemoryLayoutStore {
    fn save(&mut self, key: &str, document: &LayoutDocument) -> Result<(), StorageError> {
        check_key(key)?;
        self.slots
            .insert(key.to_string(), serde_json::to_string(document)?);
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<LayoutDocument>, StorageError> {
        check_key(key)?;
        match self.slots.get(key) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn remove(&mut self, key: &str) -> Result<bool, StorageError> {
        check_key(key)?;
        Ok(self.slots.remove(key).is_some())
    }
}
