//! Durable save/restore of a whole directory.
//!
//! Storage is an opaque whole-object round-trip: the directory is
//! serialized in one piece and reconstructed in one piece. Failures
//! propagate to the caller; no retry or recovery happens here.

pub mod fs;
pub mod memory;

pub use fs::JsonFileStore;
pub use memory::MemoryStore;

use crate::directory::ContactDirectory;
use crate::error::StorageResult;

/// Abstract interface for directory persistence.
///
/// Agnostic of the underlying mechanism (file, memory). All field
/// values, record phone lists, and directory entries survive a
/// save/load round-trip; iteration cursor state does not.
pub trait DirectoryStore {
    /// Persist the whole directory.
    fn save(&mut self, directory: &ContactDirectory) -> StorageResult<()>;

    /// Reconstruct the directory saved earlier.
    fn load(&self) -> StorageResult<ContactDirectory>;
}
