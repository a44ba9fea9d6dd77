//! Create form: three text fields and a submit action.

use api_shared::{ContentRes, CreateContentReq};

use crate::api::ContentApi;
use crate::cache::RecordCache;
use crate::notify::{Notification, Notifier};
use crate::{ClientError, ClientResult};

pub const ADDED_MESSAGE: &str = "Added data";

#[derive(Debug)]
pub struct CreateForm {
    cache: RecordCache,
    pub title: String,
    pub content: String,
    pub output: String,
}

impl CreateForm {
    pub fn new(cache: RecordCache) -> Self {
        Self {
            cache,
            title: String::new(),
            content: String::new(),
            output: String::new(),
        }
    }

    fn request(&self) -> ClientResult<CreateContentReq> {
        for (field, value) in [("title", &self.title), ("content", &self.content)] {
            if value.trim().is_empty() {
                return Err(ClientError::Validation(format!("{field} is required")));
            }
        }
        Ok(CreateContentReq {
            title: Some(self.title.clone()),
            content: Some(self.content.clone()),
            output: (!self.output.trim().is_empty()).then(|| self.output.clone()),
        })
    }

    /// Posts the form. On success the fields are cleared; on failure they are
    /// kept for the user to fix and resubmit.
    pub async fn submit<A: ContentApi>(
        &mut self,
        api: &A,
        notifier: &dyn Notifier,
    ) -> ClientResult<ContentRes> {
        let created = match self.request() {
            Ok(req) => api.create_content(&req).await,
            Err(e) => Err(e),
        };
        match created {
            Ok(record) => {
                self.title.clear();
                self.content.clear();
                self.output.clear();
                self.cache.record_created(record.clone());
                notifier.notify(Notification::success(ADDED_MESSAGE));
                Ok(record)
            }
            Err(e) => {
                notifier.notify(Notification::error(e.user_message()));
                Err(e)
            }
        }
    }
}
