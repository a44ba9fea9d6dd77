//! Central client-side record set.
//!
//! Every screen that needs the full collection reads it from one
//! [`RecordCache`] instead of fetching its own copy. Create and delete flows
//! update the cache explicitly, and interested screens subscribe to changes
//! through a `tokio::sync::watch` channel.

use std::sync::Arc;

use api_shared::ContentRes;
use tokio::sync::watch;

use crate::api::ContentApi;
use crate::ClientResult;

/// Load state of the shared record set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CacheState {
    /// Never loaded, or explicitly invalidated.
    #[default]
    Stale,
    Loading,
    Ready(Vec<ContentRes>),
    Failed(String),
}

/// Shared, subscribable copy of the full record set.
///
/// Cloning yields another handle to the same cache.
#[derive(Clone, Debug)]
pub struct RecordCache {
    state: Arc<watch::Sender<CacheState>>,
}

impl Default for RecordCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordCache {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(CacheState::Stale);
        Self { state: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> watch::Receiver<CacheState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> CacheState {
        self.state.borrow().clone()
    }

    /// The cached records, or `None` unless the cache is ready.
    pub fn records(&self) -> Option<Vec<ContentRes>> {
        match &*self.state.borrow() {
            CacheState::Ready(records) => Some(records.clone()),
            _ => None,
        }
    }

    /// Fetches the full record set and publishes it.
    ///
    /// On failure the cache moves to [`CacheState::Failed`] and the error is
    /// returned; there is no retry.
    pub async fn refresh<A: ContentApi>(&self, api: &A) -> ClientResult<Vec<ContentRes>> {
        self.state.send_replace(CacheState::Loading);
        match api.list_content().await {
            Ok(records) => {
                self.state.send_replace(CacheState::Ready(records.clone()));
                Ok(records)
            }
            Err(e) => {
                self.state.send_replace(CacheState::Failed(e.user_message()));
                Err(e)
            }
        }
    }

    /// Returns the cached records, fetching them first if the cache is not ready.
    pub async fn load<A: ContentApi>(&self, api: &A) -> ClientResult<Vec<ContentRes>> {
        match self.records() {
            Some(records) => Ok(records),
            None => self.refresh(api).await,
        }
    }

    /// Appends a freshly created record. A cache that is not ready is left
    /// alone; the next load fetches the record anyway.
    pub fn record_created(&self, record: ContentRes) {
        self.state.send_if_modified(|state| match state {
            CacheState::Ready(records) => {
                records.push(record);
                true
            }
            _ => false,
        });
    }

    /// Drops a deleted record from the cached set.
    pub fn record_deleted(&self, id: &str) {
        self.state.send_if_modified(|state| match state {
            CacheState::Ready(records) => {
                let before = records.len();
                records.retain(|r| r.id != id);
                records.len() != before
            }
            _ => false,
        });
    }

    /// Marks the cache stale so the next [`RecordCache::load`] refetches.
    pub fn invalidate(&self) {
        self.state.send_replace(CacheState::Stale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{record, FakeApi};

    #[tokio::test]
    async fn load_fetches_once_then_serves_from_cache() {
        let api = FakeApi::with_records(vec![record("1", "Binary Search")]);
        let cache = RecordCache::new();

        assert_eq!(cache.load(&api).await.unwrap().len(), 1);
        api.push(record("2", "Linked List"));
        assert_eq!(cache.load(&api).await.unwrap().len(), 1);
        assert_eq!(api.list_calls(), 1);

        cache.invalidate();
        assert_eq!(cache.load(&api).await.unwrap().len(), 2);
        assert_eq!(api.list_calls(), 2);
    }

    #[tokio::test]
    async fn subscribers_see_create_and_delete() {
        let api = FakeApi::with_records(vec![record("1", "A")]);
        let cache = RecordCache::new();
        let mut rx = cache.subscribe();
        cache.refresh(&api).await.unwrap();
        rx.borrow_and_update();

        cache.record_created(record("2", "B"));
        assert!(rx.has_changed().unwrap());
        let CacheState::Ready(records) = rx.borrow_and_update().clone() else {
            panic!("cache should be ready");
        };
        assert_eq!(records.len(), 2);

        cache.record_deleted("1");
        rx.borrow_and_update();
        assert_eq!(cache.records().unwrap(), vec![record("2", "B")]);

        cache.record_deleted("missing");
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn failed_refresh_is_published() {
        let api = FakeApi::failing();
        let cache = RecordCache::new();

        assert!(cache.refresh(&api).await.is_err());
        assert!(matches!(cache.state(), CacheState::Failed(_)));
        assert_eq!(cache.records(), None);
    }
}
