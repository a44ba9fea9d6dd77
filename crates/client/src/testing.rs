//! In-memory `ContentApi` used by the screen tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use api_shared::{ContentPageRes, ContentRes, CreateContentReq, MessageRes, UpdateContentReq};

use crate::api::ContentApi;
use crate::{ClientError, ClientResult};

pub(crate) fn record(id: &str, title: &str) -> ContentRes {
    ContentRes {
        id: id.to_string(),
        title: title.to_string(),
        content: format!("// {title}"),
        output: "ok".to_string(),
    }
}

fn not_found() -> ClientError {
    ClientError::Api {
        status: 404,
        message: "Document not found".into(),
    }
}

fn internal() -> ClientError {
    ClientError::Api {
        status: 500,
        message: "Internal Server Error".into(),
    }
}

#[derive(Default)]
pub(crate) struct FakeApi {
    records: Mutex<Vec<ContentRes>>,
    failing: bool,
    list_calls: AtomicUsize,
    next_id: AtomicUsize,
    deleted: Mutex<Vec<String>>,
}

impl FakeApi {
    pub(crate) fn with_records(records: Vec<ContentRes>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Default::default()
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub(crate) fn push(&self, record: ContentRes) {
        self.records.lock().unwrap().push(record);
    }

    pub(crate) fn records(&self) -> Vec<ContentRes> {
        self.records.lock().unwrap().clone()
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

impl ContentApi for FakeApi {
    async fn create_content(&self, req: &CreateContentReq) -> ClientResult<ContentRes> {
        if self.failing {
            return Err(internal());
        }
        let title = req.title.clone().unwrap_or_default();
        let content = req.content.clone().unwrap_or_default();
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(ClientError::Api {
                status: 400,
                message: "title is required".into(),
            });
        }
        let id = format!("fake-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let created = ContentRes {
            id,
            title,
            content,
            output: req.output.clone().unwrap_or_else(|| "(no output)".into()),
        };
        self.push(created.clone());
        Ok(created)
    }

    async fn list_content(&self) -> ClientResult<Vec<ContentRes>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(internal());
        }
        Ok(self.records())
    }

    async fn list_content_page(&self, page: usize, per_page: usize) -> ClientResult<ContentPageRes> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(internal());
        }
        let records = self.records();
        let total_items = records.len();
        Ok(ContentPageRes {
            data: records
                .into_iter()
                .skip((page - 1) * per_page)
                .take(per_page)
                .collect(),
            page,
            per_page,
            total_pages: total_items.div_ceil(per_page).max(1),
            total_items,
        })
    }

    async fn get_content_by_id(&self, id: &str) -> ClientResult<ContentRes> {
        if self.failing {
            return Err(internal());
        }
        self.records()
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(not_found)
    }

    async fn get_content_by_title(&self, title: &str) -> ClientResult<ContentRes> {
        if self.failing {
            return Err(internal());
        }
        self.records()
            .into_iter()
            .find(|r| r.title == title)
            .ok_or_else(not_found)
    }

    async fn update_content(&self, id: &str, req: &UpdateContentReq) -> ClientResult<ContentRes> {
        if self.failing {
            return Err(internal());
        }
        let mut records = self.records.lock().unwrap();
        let record = records.iter_mut().find(|r| r.id == id).ok_or_else(not_found)?;
        if let Some(title) = &req.title {
            record.title = title.clone();
        }
        if let Some(content) = &req.content {
            record.content = content.clone();
        }
        if let Some(output) = &req.output {
            record.output = output.clone();
        }
        Ok(record.clone())
    }

    async fn delete_content(&self, id: &str) -> ClientResult<MessageRes> {
        if self.failing {
            return Err(internal());
        }
        let mut records = self.records.lock().unwrap();
        let index = records.iter().position(|r| r.id == id).ok_or_else(not_found)?;
        records.remove(index);
        self.deleted.lock().unwrap().push(id.to_string());
        Ok(MessageRes::new(format!(
            "Successfully deleted document with ID: {id}"
        )))
    }
}
