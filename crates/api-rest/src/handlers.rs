//! Content API handlers.
//!
//! Each handler translates one HTTP request into one `ContentService` call
//! and the result into a JSON response. Handlers are stateless apart from
//! the shared service handle.

use api_shared::{
    ContentPageRes, ContentRes, CreateContentReq, HealthRes, HealthService, ListContentQuery,
    ListContentRes, MessageRes, TitleQuery, UpdateContentReq,
};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use notebook_core::{
    ContentListing, ContentPatch, ContentRecord, ContentService, CreateContent, PageRequest,
};

use crate::error::ApiError;

/// Application state shared across the REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub content_service: ContentService,
}

pub(crate) fn to_res(record: ContentRecord) -> ContentRes {
    ContentRes {
        id: record.id.to_string(),
        title: record.title,
        content: record.content,
        output: record.output,
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers.
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/v1/push-content",
    request_body = CreateContentReq,
    responses(
        (status = 201, description = "Content created", body = ContentRes),
        (status = 400, description = "Missing title or content, or unreadable body", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// Create a new content record.
///
/// The store assigns the identifier. An omitted `output` is stored as a
/// placeholder annotation.
///
/// # Errors
/// - `400 Bad Request` if `title` or `content` is missing or blank.
/// - `500 Internal Server Error` if the store fails.
#[axum::debug_handler]
pub async fn push_content(
    State(state): State<AppState>,
    payload: Result<Json<CreateContentReq>, JsonRejection>,
) -> Result<(StatusCode, Json<ContentRes>), ApiError> {
    let Json(req) = payload?;
    let input = CreateContent {
        title: req.title,
        content: req.content,
        output: req.output,
    };
    let record = state
        .content_service
        .create(input)
        .map_err(|e| ApiError::from_content("Create content", e))?;

    Ok((StatusCode::CREATED, Json(to_res(record))))
}

#[utoipa::path(
    get,
    path = "/v1/get-content",
    params(ListContentQuery),
    responses(
        (status = 200, description = "All records, or one page of records when paginated", body = ListContentRes),
        (status = 400, description = "Invalid pagination parameters", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// List content records.
///
/// Without `page`/`per_page` the response is a bare array of every record in
/// insertion order. With either parameter the response is a page envelope
/// carrying `totalPages`.
#[axum::debug_handler]
pub async fn get_content(
    State(state): State<AppState>,
    Query(query): Query<ListContentQuery>,
) -> Result<Json<ListContentRes>, ApiError> {
    let page = PageRequest::from_params(query.page, query.per_page)
        .map_err(|e| ApiError::from_content("List content", e))?;
    let listing = state
        .content_service
        .list(page)
        .map_err(|e| ApiError::from_content("List content", e))?;

    let res = match listing {
        ContentListing::All(records) => {
            ListContentRes::All(records.into_iter().map(to_res).collect())
        }
        ContentListing::Page(page) => ListContentRes::Page(ContentPageRes {
            data: page.items.into_iter().map(to_res).collect(),
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
            total_items: page.total_items,
        }),
    };
    Ok(Json(res))
}

#[utoipa::path(
    get,
    path = "/v1/get-content/{id}",
    params(("id" = String, Path, description = "Record identifier")),
    responses(
        (status = 200, description = "Content record", body = ContentRes),
        (status = 404, description = "Document not found", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// Fetch a single record by id.
#[axum::debug_handler]
pub async fn get_content_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContentRes>, ApiError> {
    state
        .content_service
        .get_by_id(&id)
        .map(|record| Json(to_res(record)))
        .map_err(|e| ApiError::from_content("Get content by id", e))
}

#[utoipa::path(
    get,
    path = "/v1/get-content/by/title",
    params(TitleQuery),
    responses(
        (status = 200, description = "First record with exactly this title", body = ContentRes),
        (status = 404, description = "Document not found", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// Fetch a record by exact, case-sensitive title.
///
/// A request without a `title` parameter matches nothing.
#[axum::debug_handler]
pub async fn get_content_by_title(
    State(state): State<AppState>,
    Query(query): Query<TitleQuery>,
) -> Result<Json<ContentRes>, ApiError> {
    let Some(title) = query.title else {
        return Err(ApiError::NotFound);
    };
    state
        .content_service
        .get_by_title(&title)
        .map(|record| Json(to_res(record)))
        .map_err(|e| ApiError::from_content("Get content by title", e))
}

#[utoipa::path(
    put,
    path = "/v1/update-content/{id}",
    params(("id" = String, Path, description = "Record identifier")),
    request_body = UpdateContentReq,
    responses(
        (status = 200, description = "Updated record", body = ContentRes),
        (status = 400, description = "A present field is blank, or unreadable body", body = MessageRes),
        (status = 404, description = "Document not found", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// Merge the supplied fields into an existing record.
#[axum::debug_handler]
pub async fn update_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateContentReq>, JsonRejection>,
) -> Result<Json<ContentRes>, ApiError> {
    let Json(req) = payload?;
    let patch = ContentPatch::new(req.title, req.content, req.output)
        .map_err(|e| ApiError::from_content("Update content", e))?;
    state
        .content_service
        .update(&id, patch)
        .map(|record| Json(to_res(record)))
        .map_err(|e| ApiError::from_content("Update content", e))
}

#[utoipa::path(
    delete,
    path = "/v1/delete-content/{id}",
    params(("id" = String, Path, description = "Record identifier")),
    responses(
        (status = 200, description = "Record deleted", body = MessageRes),
        (status = 404, description = "Document not found", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// Irreversibly delete a record.
#[axum::debug_handler]
pub async fn delete_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageRes>, ApiError> {
    let record = state
        .content_service
        .delete(&id)
        .map_err(|e| ApiError::from_content("Delete content", e))?;

    Ok(Json(MessageRes::new(format!(
        "Successfully deleted document with ID: {}",
        record.id
    ))))
}
