//! Loading and saving the state file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use flavorbook::{FlavorBook, backend::InMemory};

/// FlavorBook state backed by a JSON snapshot file.
pub struct StateFile {
    path: PathBuf,
    storage: Arc<InMemory>,
}

impl StateFile {
    /// Load the snapshot at `path`. A missing file starts from empty storage.
    pub fn load(path: &Path) -> flavorbook::Result<Self> {
        let storage = InMemory::load_from_file(path)?;
        tracing::debug!(path = %path.display(), records = storage.keys().len(), "Loaded state file");
        Ok(Self {
            path: path.to_path_buf(),
            storage: Arc::new(storage),
        })
    }

    /// Open both managers over the loaded storage.
    pub fn open(&self) -> flavorbook::Result<FlavorBook> {
        FlavorBook::open(self.storage.clone())
    }

    /// Write the current storage back to the file.
    pub fn save(&self) -> flavorbook::Result<()> {
        self.storage.save_to_file(&self.path)
    }
}
