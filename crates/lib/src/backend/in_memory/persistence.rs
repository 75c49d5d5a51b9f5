//! Snapshot persistence for InMemory storage
//!
//! The snapshot is one JSON document holding every stored record as a raw
//! string, the same strings `Storage::get` hands out.

use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use super::InMemory;
use crate::{Result, backend::errors::StorageError};

/// The current snapshot file format version.
/// v0 indicates this is an unstable format subject to breaking changes.
const PERSISTENCE_VERSION: u8 = 0;

/// Helper to check if version is default (0) for serde skip_serializing_if
fn is_v0(v: &u8) -> bool {
    *v == 0
}

/// Validates the snapshot version during deserialization.
fn validate_persistence_version<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let version = u8::deserialize(deserializer)?;
    if version != PERSISTENCE_VERSION {
        return Err(serde::de::Error::custom(format!(
            "unsupported persistence version {version}; only version {PERSISTENCE_VERSION} is supported"
        )));
    }
    Ok(version)
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    #[serde(
        rename = "_v",
        default,
        skip_serializing_if = "is_v0",
        deserialize_with = "validate_persistence_version"
    )]
    version: u8,
    #[serde(default)]
    records: BTreeMap<String, String>,
}

pub(crate) fn save_to_file<P: AsRef<Path>>(storage: &InMemory, path: P) -> Result<()> {
    let path = path.as_ref();
    let snapshot = Snapshot {
        version: PERSISTENCE_VERSION,
        records: storage.read().clone(),
    };

    let json = serde_json::to_string_pretty(&snapshot).map_err(|source| {
        StorageError::SerializationFailed {
            key: path.display().to_string(),
            source,
        }
    })?;
    std::fs::write(path, json).map_err(|source| StorageError::FileIo {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), records = snapshot.records.len(), "Saved storage snapshot");
    Ok(())
}

pub(crate) fn load_from_file<P: AsRef<Path>>(path: P) -> Result<InMemory> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(json) => {
            let snapshot: Snapshot =
                serde_json::from_str(&json).map_err(|source| StorageError::InvalidSnapshot {
                    path: path.to_path_buf(),
                    source,
                })?;
            debug!(path = %path.display(), records = snapshot.records.len(), "Loaded storage snapshot");
            Ok(InMemory {
                records: std::sync::RwLock::new(snapshot.records),
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No snapshot file, starting empty");
            Ok(InMemory::new())
        }
        Err(source) => Err(StorageError::FileIo {
            path: path.to_path_buf(),
            source,
        }
        .into()),
    }
}
