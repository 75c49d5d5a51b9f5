//! Storage backends for FlavorBook state
//!
//! This module provides the [`Storage`] trait, the key-value port both state
//! managers persist through, and the [`InMemory`] implementation.
//!
//! Every record is a whole JSON document stored under one key. Reads
//! deserialize the document wholesale and writes replace it wholesale; there is
//! no partial access. [`read_json`] and [`write_json`] implement that contract
//! on top of the raw string interface, including the rule that an absent or
//! malformed record reads as `None` rather than failing.

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::Result;

mod errors;
mod in_memory;

pub use errors::StorageError;
pub use in_memory::InMemory;

/// Key-value storage port abstracting where FlavorBook state lives.
///
/// Implementations only move strings; encoding is handled by the callers.
/// All implementations must be `Send` and `Sync` so a single store can be
/// shared by the session manager and the recipe store.
pub trait Storage: Send + Sync {
    /// Returns the value stored under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: String) -> Result<()>;

    /// Removes the value stored under `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Reads and decodes the JSON record stored under `key`.
///
/// Returns `Ok(None)` when the key is absent or its value does not decode as
/// `T`. Only failures of the storage itself are errors.
pub fn read_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Result<Option<T>> {
    let Some(raw) = storage.get(key)? else {
        debug!(key, "No stored record");
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!(key, error = %e, "Ignoring malformed stored record");
            Ok(None)
        }
    }
}

/// Encodes `value` as JSON and stores it under `key`, replacing the whole record.
pub fn write_json<T: Serialize + ?Sized>(storage: &dyn Storage, key: &str, value: &T) -> Result<()> {
    let encoded =
        serde_json::to_string(value).map_err(|source| StorageError::SerializationFailed {
            key: key.to_string(),
            source,
        })?;
    debug!(key, bytes = encoded.len(), "Writing record");
    storage.set(key, encoded)
}
