//! Content record data model.
//!
//! A content record is the title/content/output unit the notebook stores.
//! `title` and `content` are required; `output` is a free-form annotation.
//! Records have no ordering field of their own: list order is the order in
//! which the store received them.

use crate::validation::{output_or_default, RequiredText};
use crate::{ContentResult, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored content record as seen by callers of the core.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub output: String,
}

/// A validated request to create a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewContent {
    pub title: RequiredText,
    pub content: RequiredText,
    pub output: String,
}

impl NewContent {
    /// Validates raw create input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ContentError::MissingField`] when `title` or `content`
    /// is absent or blank. `title` is checked first.
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        output: Option<String>,
    ) -> ContentResult<Self> {
        Ok(Self {
            title: RequiredText::new("title", title.unwrap_or_default())?,
            content: RequiredText::new("content", content.unwrap_or_default())?,
            output: output_or_default(output),
        })
    }
}

/// A validated partial update. `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentPatch {
    pub title: Option<RequiredText>,
    pub content: Option<RequiredText>,
    pub output: Option<String>,
}

impl ContentPatch {
    /// Validates raw update input. Fields that are present must satisfy the
    /// same presence rules as on create.
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        output: Option<String>,
    ) -> ContentResult<Self> {
        Ok(Self {
            title: title.map(|t| RequiredText::new("title", t)).transpose()?,
            content: content
                .map(|c| RequiredText::new("content", c))
                .transpose()?,
            output,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.output.is_none()
    }

    /// Merges the present fields into `record`.
    pub fn apply(&self, record: &mut ContentRecord) {
        if let Some(title) = &self.title {
            record.title = title.as_str().to_owned();
        }
        if let Some(content) = &self.content {
            record.content = content.as_str().to_owned();
        }
        if let Some(output) = &self.output {
            record.output = output.clone();
        }
    }
}

/// The persisted form of a record.
///
/// `seq` and `created_at` exist only to reproduce insertion order and are
/// never exposed outside the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredDocument {
    #[serde(flatten)]
    pub record: ContentRecord,
    pub seq: u64,
    pub created_at: DateTime<Utc>,
}

impl StoredDocument {
    pub fn new(id: RecordId, content: NewContent, seq: u64) -> Self {
        Self {
            record: ContentRecord {
                id,
                title: content.title.into_string(),
                content: content.content.into_string(),
                output: content.output,
            },
            seq,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_OUTPUT;

    #[test]
    fn new_content_requires_title_before_content() {
        let err = NewContent::new(None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "title is required");

        let err = NewContent::new(Some("A".into()), Some(" ".into()), None).unwrap_err();
        assert_eq!(err.to_string(), "content is required");
    }

    #[test]
    fn new_content_defaults_output() {
        let content = NewContent::new(Some("A".into()), Some("x".into()), None).unwrap();
        assert_eq!(content.output, DEFAULT_OUTPUT);
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut record = ContentRecord {
            id: RecordId::new(),
            title: "Old".into(),
            content: "console.log(1)".into(),
            output: "1".into(),
        };
        let patch = ContentPatch::new(Some("New".into()), None, Some(String::new())).unwrap();
        patch.apply(&mut record);

        assert_eq!(record.title, "New");
        assert_eq!(record.content, "console.log(1)");
        assert_eq!(record.output, "");
    }

    #[test]
    fn patch_rejects_blank_required_fields() {
        let err = ContentPatch::new(None, Some("".into()), None).unwrap_err();
        assert!(err.is_validation());
        assert!(ContentPatch::new(None, None, None).unwrap().is_empty());
    }

    #[test]
    fn stored_document_flattens_record_fields() {
        let content = NewContent::new(Some("A".into()), Some("x".into()), Some("1".into())).unwrap();
        let doc = StoredDocument::new(RecordId::new(), content, 7);
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["title"], "A");
        assert_eq!(json["seq"], 7);
        assert!(json.get("record").is_none());
    }
}
