//! Incremental title search over the shared record set.

use std::sync::{Arc, Mutex};

use api_shared::ContentRes;

use crate::api::ContentApi;
use crate::cache::RecordCache;
use crate::navigation::Navigation;
use crate::notify::{Notification, Notifier};
use crate::ClientResult;

/// Case-insensitive substring match on `title`, in record order.
pub fn filter_by_title(records: &[ContentRes], query: &str) -> Vec<ContentRes> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| r.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// The title a list selection hands to the viewer.
///
/// Cloning shares the slot. Reading it with [`SearchKey::take`] empties it.
#[derive(Clone, Debug, Default)]
pub struct SearchKey {
    slot: Arc<Mutex<Option<String>>>,
}

impl SearchKey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, title: impl Into<String>) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(title.into());
        }
    }

    pub fn peek(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    pub fn take(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|mut slot| slot.take())
    }
}

/// Search box state: the current query plus the cache it filters.
#[derive(Debug)]
pub struct SearchBar {
    cache: RecordCache,
    query: String,
}

impl SearchBar {
    pub fn new(cache: RecordCache) -> Self {
        Self {
            cache,
            query: String::new(),
        }
    }

    /// Makes sure the full record set is available. Failures are reported
    /// through `notifier` and returned.
    pub async fn mount<A: ContentApi>(&self, api: &A, notifier: &dyn Notifier) -> ClientResult<()> {
        match self.cache.load(api).await {
            Ok(records) => {
                tracing::debug!("search ready over {} records", records.len());
                Ok(())
            }
            Err(e) => {
                notifier.notify(Notification::error(e.user_message()));
                Err(e)
            }
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Records matching the current query. Empty while the query is empty
    /// or the record set is not loaded.
    pub fn suggestions(&self) -> Vec<ContentRes> {
        if self.query.is_empty() {
            return Vec::new();
        }
        match self.cache.records() {
            Some(records) => filter_by_title(&records, &self.query),
            None => Vec::new(),
        }
    }

    /// Picks the suggestion at `index`, clearing the query.
    pub fn select(&mut self, index: usize) -> Option<Navigation> {
        let record = self.suggestions().into_iter().nth(index)?;
        self.query.clear();
        Some(Navigation::Detail(record))
    }
}
