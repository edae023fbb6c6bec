//! In-memory directory store.

use super::DirectoryStore;
use crate::directory::ContactDirectory;
use crate::error::{StorageError, StorageResult};

/// Holds the serialized blob in memory.
///
/// Runs the same serialize/deserialize path as the file store without
/// touching disk; used by tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Option<Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DirectoryStore for MemoryStore {
    fn save(&mut self, directory: &ContactDirectory) -> StorageResult<()> {
        self.blob = Some(serde_json::to_vec(directory)?);
        Ok(())
    }

    fn load(&self) -> StorageResult<ContactDirectory> {
        let blob = self
            .blob
            .as_ref()
            .ok_or_else(|| StorageError::NotFound("memory store".to_string()))?;
        Ok(serde_json::from_slice(blob)?)
    }
}
