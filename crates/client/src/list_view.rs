//! Paginated title listing.

use api_shared::ContentPageRes;

use crate::api::ContentApi;
use crate::navigation::Navigation;
use crate::notify::{Notification, Notifier};
use crate::search::SearchKey;

pub const DEFAULT_PER_PAGE: usize = 10;
/// Largest page size the server accepts.
pub const MAX_PER_PAGE: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Loaded(ContentPageRes),
    Failed(String),
}

#[derive(Debug)]
pub struct ListView {
    page: usize,
    per_page: usize,
    state: ListState,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl ListView {
    /// A zero `per_page` is treated as the default; larger values are capped
    /// at [`MAX_PER_PAGE`].
    pub fn new(per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: match per_page {
                0 => DEFAULT_PER_PAGE,
                n => n.min(MAX_PER_PAGE),
            },
            state: ListState::Loading,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Page count reported by the last successful load, 1 before that.
    pub fn total_pages(&self) -> usize {
        match &self.state {
            ListState::Loaded(page) => page.total_pages.max(1),
            _ => 1,
        }
    }

    pub fn titles(&self) -> Vec<&str> {
        match &self.state {
            ListState::Loaded(page) => page.data.iter().map(|r| r.title.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Fetches the current page.
    pub async fn load<A: ContentApi>(&mut self, api: &A, notifier: &dyn Notifier) {
        self.state = ListState::Loading;
        match api.list_content_page(self.page, self.per_page).await {
            Ok(page) => {
                tracing::debug!(
                    "listed page {} of {} ({} records)",
                    page.page,
                    page.total_pages,
                    page.data.len()
                );
                self.state = ListState::Loaded(page);
            }
            Err(e) => {
                let message = e.user_message();
                notifier.notify(Notification::error(message.clone()));
                self.state = ListState::Failed(message);
            }
        }
    }

    /// Moves to `page` and loads it. Pages outside `1..=total_pages` are
    /// ignored without a request; returns whether a load happened.
    pub async fn go_to_page<A: ContentApi>(
        &mut self,
        page: usize,
        api: &A,
        notifier: &dyn Notifier,
    ) -> bool {
        if page == 0 || page > self.total_pages() {
            return false;
        }
        self.page = page;
        self.load(api, notifier).await;
        true
    }

    /// Hands the title at `index` on the current page to the viewer.
    pub fn select(&self, index: usize, key: &SearchKey) -> Option<Navigation> {
        let ListState::Loaded(page) = &self.state else {
            return None;
        };
        let title = page.data.get(index)?.title.clone();
        key.set(title.clone());
        Some(Navigation::DetailByTitle(title))
    }
}
