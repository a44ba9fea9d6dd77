use std::sync::{Arc, Mutex, MutexGuard};

use crate::model::StoredDocument;
use crate::store::RecordStore;
use crate::{ContentError, ContentPatch, ContentRecord, ContentResult, NewContent, RecordId};

/// In-memory record store for tests and `memory://` deployments.
///
/// Documents are kept in a `Vec` in insertion order, so no sequence
/// bookkeeping beyond the vector position is needed.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    documents: Arc<Mutex<Vec<StoredDocument>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn documents(&self) -> ContentResult<MutexGuard<'_, Vec<StoredDocument>>> {
        self.documents
            .lock()
            .map_err(|_| ContentError::StoreLockPoisoned)
    }
}

impl RecordStore for MemoryStore {
    fn insert(&self, content: NewContent) -> ContentResult<ContentRecord> {
        let mut documents = self.documents()?;
        let mut id = RecordId::new();
        while documents.iter().any(|d| d.record.id == id) {
            id = RecordId::new();
        }
        let seq = documents.last().map_or(0, |d| d.seq + 1);
        let document = StoredDocument::new(id, content, seq);
        let record = document.record.clone();
        documents.push(document);
        Ok(record)
    }

    fn all(&self) -> ContentResult<Vec<ContentRecord>> {
        Ok(self
            .documents()?
            .iter()
            .map(|d| d.record.clone())
            .collect())
    }

    fn find_by_id(&self, id: &RecordId) -> ContentResult<Option<ContentRecord>> {
        Ok(self
            .documents()?
            .iter()
            .find(|d| &d.record.id == id)
            .map(|d| d.record.clone()))
    }

    fn find_by_title(&self, title: &str) -> ContentResult<Option<ContentRecord>> {
        Ok(self
            .documents()?
            .iter()
            .find(|d| d.record.title == title)
            .map(|d| d.record.clone()))
    }

    fn update(&self, id: &RecordId, patch: ContentPatch) -> ContentResult<Option<ContentRecord>> {
        let mut documents = self.documents()?;
        let Some(document) = documents.iter_mut().find(|d| &d.record.id == id) else {
            return Ok(None);
        };
        patch.apply(&mut document.record);
        Ok(Some(document.record.clone()))
    }

    fn delete(&self, id: &RecordId) -> ContentResult<Option<ContentRecord>> {
        let mut documents = self.documents()?;
        let Some(index) = documents.iter().position(|d| &d.record.id == id) else {
            return Ok(None);
        };
        Ok(Some(documents.remove(index).record))
    }

    fn count(&self) -> ContentResult<usize> {
        Ok(self.documents()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_content(title: &str) -> NewContent {
        NewContent::new(Some(title.into()), Some("body".into()), None).unwrap()
    }

    #[test]
    fn insert_assigns_ids_and_keeps_order() {
        let store = MemoryStore::new();
        let a = store.insert(new_content("A")).unwrap();
        let b = store.insert(new_content("B")).unwrap();

        assert_ne!(a.id, b.id);
        let titles: Vec<_> = store.all().unwrap().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, ["A", "B"]);
    }

    #[test]
    fn find_by_title_is_exact_and_returns_first_match() {
        let store = MemoryStore::new();
        let first = store.insert(new_content("Foo")).unwrap();
        store.insert(new_content("Foo")).unwrap();

        assert_eq!(store.find_by_title("Foo").unwrap(), Some(first));
        assert_eq!(store.find_by_title("foo").unwrap(), None);
    }

    #[test]
    fn update_and_delete_miss_on_unknown_id() {
        let store = MemoryStore::new();
        let id = RecordId::new();
        assert_eq!(store.update(&id, ContentPatch::default()).unwrap(), None);
        assert_eq!(store.delete(&id).unwrap(), None);
    }

    #[test]
    fn delete_removes_the_record() {
        let store = MemoryStore::new();
        let record = store.insert(new_content("A")).unwrap();

        assert_eq!(store.delete(&record.id).unwrap(), Some(record.clone()));
        assert_eq!(store.find_by_id(&record.id).unwrap(), None);
        assert_eq!(store.count().unwrap(), 0);
    }
}
