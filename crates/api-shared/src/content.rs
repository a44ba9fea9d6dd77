//! JSON bodies for the `/v1` content routes.
//!
//! Field names follow the wire format the browser client has always used:
//! snake_case query parameters (`page`, `per_page`) and camelCase pagination
//! metadata (`totalPages`).

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A content record as sent over the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContentRes {
    /// Store-assigned opaque identifier.
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub output: String,
}

/// Body of `POST /v1/push-content`.
///
/// Every field is optional at the JSON level so that a missing `title` or
/// `content` is reported as a validation error rather than a parse failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateContentReq {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// Body of `PUT /v1/update-content/{id}`: any subset of the record fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateContentReq {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// Query string of `GET /v1/get-content`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListContentQuery {
    /// 1-based page number.
    pub page: Option<usize>,
    /// Records per page (default 10, max 100).
    pub per_page: Option<usize>,
}

/// Query string of `GET /v1/get-content/by/title`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TitleQuery {
    /// Exact, case-sensitive title.
    pub title: Option<String>,
}

/// One page of records plus pager metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentPageRes {
    pub data: Vec<ContentRes>,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Response of `GET /v1/get-content`.
///
/// A bare array when no pagination parameter was given, otherwise a page
/// envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ListContentRes {
    All(Vec<ContentRes>),
    Page(ContentPageRes),
}

impl ListContentRes {
    pub fn records(&self) -> &[ContentRes] {
        match self {
            ListContentRes::All(records) => records,
            ListContentRes::Page(page) => &page.data,
        }
    }

    pub fn into_records(self) -> Vec<ContentRes> {
        match self {
            ListContentRes::All(records) => records,
            ListContentRes::Page(page) => page.data,
        }
    }
}

/// A plain `{ "message": ... }` body, used for delete confirmations and
/// every error response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageRes {
    pub message: String,
}

impl MessageRes {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_res_accepts_document_store_id_field() {
        let json = r#"{"_id":"abc","title":"A","content":"x","output":"1"}"#;
        let record: ContentRes = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "abc");
    }

    #[test]
    fn list_response_parses_both_shapes() {
        let bare: ListContentRes =
            serde_json::from_str(r#"[{"id":"a","title":"A","content":"x"}]"#).unwrap();
        assert!(matches!(bare, ListContentRes::All(ref v) if v.len() == 1));

        let paged: ListContentRes = serde_json::from_str(
            r#"{"data":[],"page":2,"perPage":10,"totalPages":3,"totalItems":25}"#,
        )
        .unwrap();
        let ListContentRes::Page(page) = paged else {
            panic!("expected a page envelope");
        };
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.per_page, 10);
    }

    #[test]
    fn create_request_omits_absent_fields() {
        let req = CreateContentReq {
            title: Some("A".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"title":"A"}"#);
    }
}
