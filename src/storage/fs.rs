//! JSON file-backed directory store.

use super::DirectoryStore;
use crate::directory::ContactDirectory;
use crate::error::{StorageError, StorageResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Persists the whole directory as a single JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DirectoryStore for JsonFileStore {
    fn save(&mut self, directory: &ContactDirectory) -> StorageResult<()> {
        let blob = serde_json::to_vec_pretty(directory)?;
        fs::write(&self.path, blob)?;
        tracing::info!(
            "saved {} records to {}",
            directory.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> StorageResult<ContactDirectory> {
        if !self.path.exists() {
            return Err(StorageError::NotFound(self.path.display().to_string()));
        }

        let blob = fs::read(&self.path)?;
        let directory: ContactDirectory = serde_json::from_slice(&blob)?;
        tracing::info!(
            "loaded {} records from {}",
            directory.len(),
            self.path.display()
        );
        Ok(directory)
    }
}
