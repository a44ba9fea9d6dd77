//! Single-record viewer with a cursor, copy and two-phase delete.

use api_shared::ContentRes;

use crate::api::ContentApi;
use crate::cache::RecordCache;
use crate::notify::{Clipboard, Notification, Notifier};
use crate::search::SearchKey;
use crate::{ClientError, ClientResult};

pub const COPIED_MESSAGE: &str = "Code copied to clipboard!";
pub const DELETED_MESSAGE: &str = "Deleted";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewerState {
    Loading,
    Showing,
    /// Nothing to show: no match, or the last record was deleted.
    Empty,
    Failed(String),
}

#[derive(Debug)]
pub struct Viewer {
    cache: RecordCache,
    state: ViewerState,
    records: Vec<ContentRes>,
    cursor: usize,
    confirming_delete: bool,
}

impl Viewer {
    pub fn new(cache: RecordCache) -> Self {
        Self {
            cache,
            state: ViewerState::Loading,
            records: Vec::new(),
            cursor: 0,
            confirming_delete: false,
        }
    }

    fn show(&mut self, records: Vec<ContentRes>) {
        self.state = if records.is_empty() {
            ViewerState::Empty
        } else {
            ViewerState::Showing
        };
        self.records = records;
        self.cursor = 0;
        self.confirming_delete = false;
    }

    fn fail(&mut self, e: &ClientError, notifier: &dyn Notifier) {
        let message = e.user_message();
        notifier.notify(Notification::error(message.clone()));
        self.records.clear();
        self.cursor = 0;
        self.confirming_delete = false;
        self.state = ViewerState::Failed(message);
    }

    /// Shows the record with exactly this title. An unknown title leaves
    /// the viewer empty.
    pub async fn open_title<A: ContentApi>(&mut self, api: &A, title: &str, notifier: &dyn Notifier) {
        self.state = ViewerState::Loading;
        match api.get_content_by_title(title).await {
            Ok(record) => self.show(vec![record]),
            Err(e) if e.is_not_found() => self.show(Vec::new()),
            Err(e) => self.fail(&e, notifier),
        }
    }

    /// Shows the full record set from the shared cache.
    pub async fn open_all<A: ContentApi>(&mut self, api: &A, notifier: &dyn Notifier) {
        self.state = ViewerState::Loading;
        match self.cache.load(api).await {
            Ok(records) => self.show(records),
            Err(e) => self.fail(&e, notifier),
        }
    }

    /// Consumes the pending search key, falling back to the full set when
    /// none is pending.
    pub async fn open_search_key<A: ContentApi>(
        &mut self,
        api: &A,
        key: &SearchKey,
        notifier: &dyn Notifier,
    ) {
        match key.take() {
            Some(title) => self.open_title(api, &title, notifier).await,
            None => self.open_all(api, notifier).await,
        }
    }

    /// Shows a record already in hand, e.g. a search suggestion.
    pub fn open_record(&mut self, record: ContentRes) {
        self.show(vec![record]);
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn records(&self) -> &[ContentRes] {
        &self.records
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&ContentRes> {
        self.records.get(self.cursor)
    }

    pub fn can_previous(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_next(&self) -> bool {
        self.cursor + 1 < self.records.len()
    }

    pub fn previous(&mut self) -> bool {
        if !self.can_previous() {
            return false;
        }
        self.cursor -= 1;
        self.confirming_delete = false;
        true
    }

    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.cursor += 1;
        self.confirming_delete = false;
        true
    }

    /// Jumps straight to `index`; out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.records.len() {
            return false;
        }
        self.cursor = index;
        self.confirming_delete = false;
        true
    }

    /// Copies the current record's code. Clipboard failures are only logged.
    pub fn copy_current(&self, clipboard: &mut dyn Clipboard, notifier: &dyn Notifier) -> bool {
        let Some(record) = self.current() else {
            return false;
        };
        match clipboard.set_text(&record.content) {
            Ok(()) => {
                notifier.notify(Notification::success(COPIED_MESSAGE));
                true
            }
            Err(e) => {
                tracing::warn!("failed to copy record {}: {e}", record.id);
                false
            }
        }
    }

    /// First phase of delete: asks for confirmation.
    pub fn request_delete(&mut self) -> bool {
        self.confirming_delete = self.current().is_some();
        self.confirming_delete
    }

    pub fn cancel_delete(&mut self) {
        self.confirming_delete = false;
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.confirming_delete
    }

    /// Second phase of delete: removes the current record on the server,
    /// then locally and from the shared cache.
    pub async fn confirm_delete<A: ContentApi>(
        &mut self,
        api: &A,
        notifier: &dyn Notifier,
    ) -> ClientResult<ContentRes> {
        if !self.confirming_delete {
            return Err(ClientError::Validation("delete was not requested".into()));
        }
        self.confirming_delete = false;
        let Some(record) = self.current().cloned() else {
            return Err(ClientError::Validation("no record selected".into()));
        };

        if let Err(e) = api.delete_content(&record.id).await {
            notifier.notify(Notification::error(e.user_message()));
            return Err(e);
        }

        let was_last = self.cursor + 1 == self.records.len();
        self.records.remove(self.cursor);
        self.cursor = if was_last && self.cursor > 0 {
            self.cursor - 1
        } else {
            0
        };
        if self.records.is_empty() {
            self.state = ViewerState::Empty;
        }
        self.cache.record_deleted(&record.id);
        notifier.notify(Notification::success(DELETED_MESSAGE));
        tracing::info!("deleted record {}", record.id);
        Ok(record)
    }
}
