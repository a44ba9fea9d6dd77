//! Client side of the notebook.
//!
//! [`HttpContentClient`] talks to the REST API. The remaining modules are
//! headless screen state (list, search, viewer and create form) sharing one
//! [`RecordCache`]; a front-end renders them and supplies a [`Notifier`] and
//! a [`Clipboard`].

pub mod api;
pub mod cache;
pub mod create_form;
pub mod error;
pub mod list_view;
pub mod navigation;
pub mod notify;
pub mod search;
pub mod viewer;

#[cfg(test)]
mod testing;

pub use api::{ContentApi, HttpContentClient};
pub use cache::{CacheState, RecordCache};
pub use create_form::CreateForm;
pub use error::{ClientError, ClientResult};
pub use list_view::{ListState, ListView};
pub use navigation::Navigation;
pub use notify::{Clipboard, Notification, NotificationLevel, NotificationLog, Notifier};
pub use search::{filter_by_title, SearchBar, SearchKey};
pub use viewer::{Viewer, ViewerState};
