//! In-memory storage backend
//!
//! Keeps every record in a map guarded by a `RwLock`. The whole map can be
//! written to and read back from a JSON snapshot file, which is how the
//! command-line front end keeps state between runs.

mod persistence;

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock};

use crate::Result;
use crate::backend::Storage;

/// A simple in-memory storage implementation using a `BTreeMap`.
///
/// Suitable for tests, and for front ends that snapshot the whole state to a
/// file via [`InMemory::save_to_file`] / [`InMemory::load_from_file`].
#[derive(Debug, Default)]
pub struct InMemory {
    /// Raw record values keyed by storage key
    pub(crate) records: RwLock<BTreeMap<String, String>>,
}

impl InMemory {
    /// Creates a new, empty `InMemory` storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the keys currently holding a value, in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Saves every record to `path` as a single JSON snapshot.
    ///
    /// # Errors
    /// Returns a `StorageError` if the snapshot cannot be encoded or written.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        persistence::save_to_file(self, path)
    }

    /// Loads storage from a JSON snapshot written by [`InMemory::save_to_file`].
    ///
    /// If the file does not exist, a new, empty `InMemory` is returned.
    ///
    /// # Errors
    /// Returns a `StorageError` if the file cannot be read or is not a valid
    /// snapshot.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        persistence::load_from_file(path)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<String, String>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, BTreeMap<String, String>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for InMemory {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        self.write().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.write().remove(key);
        Ok(())
    }
}
