//! File-backed record store.
//!
//! Each record is a single JSON document in a sharded directory tree:
//!
//! ```text
//! <data_dir>/
//!   content/
//!     <s1>/
//!       <s2>/
//!         <id>.json
//! ```
//!
//! where `s1` and `s2` are the first four hex characters of the record id.
//! Sharding keeps any single directory small as the collection grows.
//!
//! Writes go to a temporary sibling first and are renamed into place, so a
//! reader never observes a half-written document. Mutations are serialised
//! by an in-process lock which also guards the insertion sequence counter.

use crate::constants::{CONTENT_DIR_NAME, DOCUMENT_EXTENSION, ID_ALLOCATION_ATTEMPTS};
use crate::model::StoredDocument;
use crate::store::RecordStore;
use crate::{ContentError, ContentPatch, ContentRecord, ContentResult, NewContent, RecordId};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Record store persisting one JSON document per record.
#[derive(Debug)]
pub struct FileStore {
    collection_dir: PathBuf,
    /// Next insertion sequence number; holding the lock serialises writers.
    next_seq: Mutex<u64>,
}

impl FileStore {
    /// Opens (creating if needed) the collection under `data_dir`.
    ///
    /// The insertion sequence resumes after the highest `seq` found on disk.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::StorageDirCreation`] if the collection directory
    /// cannot be created, or [`ContentError::FileRead`] if it cannot be scanned.
    pub fn open(data_dir: &Path) -> ContentResult<Self> {
        let collection_dir = data_dir.join(CONTENT_DIR_NAME);
        fs::create_dir_all(&collection_dir).map_err(ContentError::StorageDirCreation)?;

        let store = Self {
            collection_dir,
            next_seq: Mutex::new(0),
        };
        let next = store
            .load_all()?
            .last()
            .map_or(0, |document| document.seq + 1);
        *store.write_lock()? = next;

        tracing::debug!(
            "opened file store at {} (next seq {})",
            store.collection_dir.display(),
            next
        );
        Ok(store)
    }

    pub fn collection_dir(&self) -> &Path {
        &self.collection_dir
    }

    fn write_lock(&self) -> ContentResult<MutexGuard<'_, u64>> {
        self.next_seq
            .lock()
            .map_err(|_| ContentError::StoreLockPoisoned)
    }

    /// Reads every document in the collection, ordered by insertion.
    fn load_all(&self) -> ContentResult<Vec<StoredDocument>> {
        let mut documents = Vec::new();

        for s1 in fs::read_dir(&self.collection_dir).map_err(ContentError::FileRead)? {
            let s1_path = s1.map_err(ContentError::FileRead)?.path();
            if !s1_path.is_dir() {
                continue;
            }
            let Ok(s2_iter) = fs::read_dir(&s1_path) else {
                continue;
            };
            for s2 in s2_iter.flatten() {
                let s2_path = s2.path();
                if !s2_path.is_dir() {
                    continue;
                }
                let Ok(doc_iter) = fs::read_dir(&s2_path) else {
                    continue;
                };
                for doc in doc_iter.flatten() {
                    let path = doc.path();
                    if path.extension().and_then(|e| e.to_str()) != Some(DOCUMENT_EXTENSION) {
                        continue;
                    }
                    match read_document(&path) {
                        Ok(Some(document)) => documents.push(document),
                        Ok(None) => {}
                        Err(e) => {
                            tracing::warn!("skipping unreadable document {}: {}", path.display(), e)
                        }
                    }
                }
            }
        }

        documents.sort_by(|a, b| {
            a.seq
                .cmp(&b.seq)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        Ok(documents)
    }
}

impl RecordStore for FileStore {
    fn insert(&self, content: NewContent) -> ContentResult<ContentRecord> {
        let mut next_seq = self.write_lock()?;

        let mut allocated = None;
        for _attempt in 0..ID_ALLOCATION_ATTEMPTS {
            let id = RecordId::new();
            if !id.document_path(&self.collection_dir).exists() {
                allocated = Some(id);
                break;
            }
        }
        let id = allocated.ok_or(ContentError::IdAllocation(ID_ALLOCATION_ATTEMPTS))?;

        let document = StoredDocument::new(id, content, *next_seq);
        write_document(&document.record.id.document_path(&self.collection_dir), &document)?;
        *next_seq += 1;

        Ok(document.record)
    }

    fn all(&self) -> ContentResult<Vec<ContentRecord>> {
        Ok(self.load_all()?.into_iter().map(|d| d.record).collect())
    }

    fn find_by_id(&self, id: &RecordId) -> ContentResult<Option<ContentRecord>> {
        Ok(read_document(&id.document_path(&self.collection_dir))?.map(|d| d.record))
    }

    fn find_by_title(&self, title: &str) -> ContentResult<Option<ContentRecord>> {
        Ok(self
            .load_all()?
            .into_iter()
            .find(|d| d.record.title == title)
            .map(|d| d.record))
    }

    fn update(&self, id: &RecordId, patch: ContentPatch) -> ContentResult<Option<ContentRecord>> {
        let _guard = self.write_lock()?;
        let path = id.document_path(&self.collection_dir);

        let Some(mut document) = read_document(&path)? else {
            return Ok(None);
        };
        patch.apply(&mut document.record);
        write_document(&path, &document)?;

        Ok(Some(document.record))
    }

    fn delete(&self, id: &RecordId) -> ContentResult<Option<ContentRecord>> {
        let _guard = self.write_lock()?;
        let path = id.document_path(&self.collection_dir);

        let Some(document) = read_document(&path)? else {
            return Ok(None);
        };
        match fs::remove_file(&path) {
            Ok(()) => Ok(Some(document.record)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ContentError::FileRemove(e)),
        }
    }
}

fn read_document(path: &Path) -> ContentResult<Option<StoredDocument>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ContentError::FileRead(e)),
    };
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(ContentError::Deserialization)
}

fn write_document(path: &Path, document: &StoredDocument) -> ContentResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(ContentError::StorageDirCreation)?;
    }
    let json = serde_json::to_string_pretty(document).map_err(ContentError::Serialization)?;

    let tmp_path = path.with_extension(format!("{DOCUMENT_EXTENSION}.tmp"));
    fs::write(&tmp_path, json).map_err(ContentError::FileWrite)?;
    fs::rename(&tmp_path, path).map_err(ContentError::FileWrite)
}
