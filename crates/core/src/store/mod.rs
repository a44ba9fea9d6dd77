//! Record Store: the document collection holding content records.
//!
//! The store is a plain collection. It assigns identifiers, keeps insertion
//! order and performs one document operation per call; validation, pagination
//! and error classification live in [`crate::ContentService`].
//!
//! Two backends are provided:
//! - [`MemoryStore`] keeps documents in process memory.
//! - [`FileStore`] keeps one JSON document per record on disk.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::config::StoreLocation;
use crate::{ContentPatch, ContentRecord, ContentResult, NewContent, RecordId};
use std::sync::Arc;

/// Operations every record store backend provides.
///
/// Lookups that miss return `Ok(None)`; `Err` is reserved for store faults.
pub trait RecordStore: Send + Sync {
    /// Persists a new record and returns it with its assigned id.
    fn insert(&self, content: NewContent) -> ContentResult<ContentRecord>;

    /// All records in insertion order.
    fn all(&self) -> ContentResult<Vec<ContentRecord>>;

    fn find_by_id(&self, id: &RecordId) -> ContentResult<Option<ContentRecord>>;

    /// First record, in insertion order, whose title equals `title` exactly.
    fn find_by_title(&self, title: &str) -> ContentResult<Option<ContentRecord>>;

    /// Merges `patch` into the record and returns the updated record.
    fn update(&self, id: &RecordId, patch: ContentPatch) -> ContentResult<Option<ContentRecord>>;

    /// Removes the record and returns what was removed.
    fn delete(&self, id: &RecordId) -> ContentResult<Option<ContentRecord>>;

    fn count(&self) -> ContentResult<usize> {
        Ok(self.all()?.len())
    }
}

/// Opens the store named by `location`.
///
/// # Errors
///
/// Returns a storage error if a file-backed collection cannot be created or
/// scanned.
pub fn open_store(location: &StoreLocation) -> ContentResult<Arc<dyn RecordStore>> {
    match location {
        StoreLocation::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreLocation::File(dir) => Ok(Arc::new(FileStore::open(dir)?)),
    }
}
