//! Content service: the store-facing half of the Content API.
//!
//! Each method performs exactly one store operation and classifies the
//! outcome into the core error taxonomy. There are no retries and no
//! transactions; a store fault is returned to the caller as-is.
//!
//! **No API concerns**: HTTP routing, status codes and JSON shapes belong in
//! `api-rest` and `api-shared`.

use crate::pagination::{Page, PageRequest};
use crate::store::RecordStore;
use crate::{ContentError, ContentPatch, ContentRecord, ContentResult, NewContent, RecordId};
use std::sync::Arc;

/// Raw create input as received from a caller.
#[derive(Clone, Debug, Default)]
pub struct CreateContent {
    pub title: Option<String>,
    pub content: Option<String>,
    pub output: Option<String>,
}

/// Result of a list request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentListing {
    /// Every record, in insertion order.
    All(Vec<ContentRecord>),
    /// One page of records.
    Page(Page<ContentRecord>),
}

impl ContentListing {
    pub fn records(&self) -> &[ContentRecord] {
        match self {
            ContentListing::All(records) => records,
            ContentListing::Page(page) => &page.items,
        }
    }
}

/// Content operations over a shared [`RecordStore`].
#[derive(Clone)]
pub struct ContentService {
    store: Arc<dyn RecordStore>,
}

impl ContentService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Validates and persists a new record.
    ///
    /// # Errors
    ///
    /// - [`ContentError::MissingField`] if `title` or `content` is absent or blank.
    /// - A storage error if the store fails to persist the document.
    pub fn create(&self, input: CreateContent) -> ContentResult<ContentRecord> {
        let content = NewContent::new(input.title, input.content, input.output)?;
        let record = self.store.insert(content)?;
        tracing::debug!("created content {}", record.id);
        Ok(record)
    }

    /// Lists every record, or a single page when `page` is given.
    pub fn list(&self, page: Option<PageRequest>) -> ContentResult<ContentListing> {
        let records = self.store.all()?;
        Ok(match page {
            None => ContentListing::All(records),
            Some(request) => ContentListing::Page(request.slice(records)),
        })
    }

    /// Looks a record up by id.
    ///
    /// # Errors
    ///
    /// [`ContentError::NotFound`] if `id` is malformed or unknown.
    pub fn get_by_id(&self, id: &str) -> ContentResult<ContentRecord> {
        let record_id = RecordId::parse(id)?;
        self.store
            .find_by_id(&record_id)?
            .ok_or_else(|| ContentError::NotFound(id.to_string()))
    }

    /// Looks a record up by exact, case-sensitive title.
    ///
    /// When several records share a title the earliest inserted one wins.
    pub fn get_by_title(&self, title: &str) -> ContentResult<ContentRecord> {
        self.store
            .find_by_title(title)?
            .ok_or_else(|| ContentError::NotFound(title.to_string()))
    }

    /// Merges `patch` into the record with the given id.
    ///
    /// An empty patch is allowed and returns the record unchanged.
    pub fn update(&self, id: &str, patch: ContentPatch) -> ContentResult<ContentRecord> {
        let record_id = RecordId::parse(id)?;
        self.store
            .update(&record_id, patch)?
            .ok_or_else(|| ContentError::NotFound(id.to_string()))
    }

    /// Irreversibly removes a record and returns it.
    pub fn delete(&self, id: &str) -> ContentResult<ContentRecord> {
        let record_id = RecordId::parse(id)?;
        let record = self
            .store
            .delete(&record_id)?
            .ok_or_else(|| ContentError::NotFound(id.to_string()))?;
        tracing::debug!("deleted content {}", record.id);
        Ok(record)
    }
}
