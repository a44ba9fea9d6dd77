//! # API REST
//!
//! REST API for the notebook content service.
//!
//! Handles:
//! - HTTP endpoints with axum, nested under `/v1`
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, status mapping, CORS)
//!
//! Uses `api-shared` for wire types and `notebook-core` for data operations.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod handlers;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use notebook_core::ContentService;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;
pub use handlers::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::push_content,
        handlers::get_content,
        handlers::get_content_by_id,
        handlers::get_content_by_title,
        handlers::update_content,
        handlers::delete_content,
    ),
    components(schemas(
        api_shared::HealthRes,
        api_shared::ContentRes,
        api_shared::CreateContentReq,
        api_shared::UpdateContentReq,
        api_shared::ContentPageRes,
        api_shared::ListContentRes,
        api_shared::MessageRes,
    ))
)]
pub struct ApiDoc;

/// Routes for the content collection, relative to `/v1`.
fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/push-content", post(handlers::push_content))
        .route("/get-content", get(handlers::get_content))
        .route("/get-content/by/title", get(handlers::get_content_by_title))
        .route("/get-content/:id", get(handlers::get_content_by_id))
        .route("/update-content/:id", put(handlers::update_content))
        .route("/delete-content/:id", delete(handlers::delete_content))
}

/// Builds the complete application router around `content_service`.
pub fn router(content_service: ContentService) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .nest("/v1", content_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { content_service })
}

/// Binds `addr` and serves the API until the process is stopped.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails while
/// running.
pub async fn serve(addr: &str, content_service: ContentService) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("++ Notebook REST API listening on {}", listener.local_addr()?);
    axum::serve(listener, router(content_service)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use notebook_core::{FileStore, MemoryStore, RecordStore};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> Router {
        router(ContentService::new(Arc::new(MemoryStore::new())))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        app.clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn push(app: &Router, title: &str, content: &str) -> Value {
        let response = send(
            app,
            "POST",
            "/v1/push-content",
            Some(json!({"title": title, "content": content, "output": "1"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        json_body(response).await
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = test_app();
        let response = send(&app, "GET", "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["ok"], true);
    }

    #[tokio::test]
    async fn create_list_delete_round_trip() {
        let app = test_app();
        let created = push(&app, "A", "console.log(1)").await;
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(created["output"], "1");

        let listed = json_body(send(&app, "GET", "/v1/get-content", None).await).await;
        let listed = listed.as_array().expect("bare array without pagination");
        assert!(listed.iter().any(|r| r["id"] == id.as_str()));

        let deleted = send(&app, "DELETE", &format!("/v1/delete-content/{id}"), None).await;
        assert_eq!(deleted.status(), StatusCode::OK);
        assert_eq!(
            json_body(deleted).await["message"],
            format!("Successfully deleted document with ID: {id}")
        );

        let after = send(&app, "GET", &format!("/v1/get-content/{id}"), None).await;
        assert_eq!(after.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(after).await["message"], "Document not found");
    }

    #[tokio::test]
    async fn create_without_content_is_a_validation_error() {
        let app = test_app();
        let response = send(&app, "POST", "/v1/push-content", Some(json!({"title": "A"}))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["message"], "content is required");
    }

    async fn send_raw(
        app: &Router,
        method: &str,
        uri: &str,
        content_type: Option<&str>,
        body: &'static str,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        app.clone()
            .oneshot(builder.body(Body::from(body)).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn unreadable_bodies_are_validation_errors_with_a_message() {
        let app = test_app();
        let cases = [
            ("POST", "/v1/push-content", Some("application/json"), "{not json"),
            ("POST", "/v1/push-content", None, r#"{"title":"A","content":"x"}"#),
            ("POST", "/v1/push-content", Some("application/json"), r#"{"title":5}"#),
            ("PUT", "/v1/update-content/00000000000000000000000000000000", Some("application/json"), "{not json"),
        ];
        for (method, uri, content_type, body) in cases {
            let response = send_raw(&app, method, uri, content_type, body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{method} {body}");
            let message = json_body(response).await["message"].clone();
            assert!(
                message.as_str().is_some_and(|m| !m.is_empty()),
                "{method} {body}: {message}"
            );
        }
    }

    #[tokio::test]
    async fn create_without_output_stores_default_annotation() {
        let app = test_app();
        let response = send(
            &app,
            "POST",
            "/v1/push-content",
            Some(json!({"title": "A", "content": "x"})),
        )
        .await;
        let created = json_body(response).await;
        assert!(!created["output"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn pagination_returns_envelope_with_total_pages() {
        let app = test_app();
        for i in 0..12 {
            push(&app, &format!("note {i}"), "x").await;
        }

        let page = json_body(send(&app, "GET", "/v1/get-content?page=2&per_page=5", None).await).await;
        assert_eq!(page["totalPages"], 3);
        assert_eq!(page["totalItems"], 12);
        assert_eq!(page["page"], 2);
        let titles: Vec<_> = page["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, ["note 5", "note 6", "note 7", "note 8", "note 9"]);

        let bad = send(&app, "GET", "/v1/get-content?page=0", None).await;
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn title_lookup_is_exact_and_case_sensitive() {
        let app = test_app();
        push(&app, "Foo", "x").await;

        let hit = send(&app, "GET", "/v1/get-content/by/title?title=Foo", None).await;
        assert_eq!(hit.status(), StatusCode::OK);
        assert_eq!(json_body(hit).await["title"], "Foo");

        let miss = send(&app, "GET", "/v1/get-content/by/title?title=foo", None).await;
        assert_eq!(miss.status(), StatusCode::NOT_FOUND);

        let no_param = send(&app, "GET", "/v1/get-content/by/title", None).await;
        assert_eq!(no_param.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_merges_and_reports_unknown_ids() {
        let app = test_app();
        let id = push(&app, "A", "x").await["id"].as_str().unwrap().to_string();

        let updated = send(
            &app,
            "PUT",
            &format!("/v1/update-content/{id}"),
            Some(json!({"output": "2"})),
        )
        .await;
        assert_eq!(updated.status(), StatusCode::OK);
        let updated = json_body(updated).await;
        assert_eq!(updated["output"], "2");
        assert_eq!(updated["title"], "A");

        let blank = send(
            &app,
            "PUT",
            &format!("/v1/update-content/{id}"),
            Some(json!({"title": "  "})),
        )
        .await;
        assert_eq!(blank.status(), StatusCode::BAD_REQUEST);

        let unknown = send(
            &app,
            "PUT",
            "/v1/update-content/00000000000000000000000000000000",
            Some(json!({"output": "2"})),
        )
        .await;
        assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_ids_are_not_found() {
        let app = test_app();
        for (method, uri) in [
            ("GET", "/v1/get-content/not-an-id"),
            ("DELETE", "/v1/delete-content/not-an-id"),
        ] {
            let response = send(&app, method, uri, None).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
        }
    }

    #[tokio::test]
    async fn file_store_faults_surface_as_generic_internal_errors() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let store = FileStore::open(temp_dir.path()).unwrap();
        let record = store
            .insert(
                notebook_core::NewContent::new(Some("A".into()), Some("x".into()), None).unwrap(),
            )
            .unwrap();
        std::fs::write(record.id.document_path(store.collection_dir()), "{ corrupt").unwrap();

        let app = router(ContentService::new(Arc::new(store)));
        let response = send(&app, "GET", &format!("/v1/get-content/{}", record.id), None).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["message"], "Internal Server Error");
    }

    #[tokio::test]
    async fn openapi_document_lists_content_routes() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();
        for path in [
            "/v1/push-content",
            "/v1/get-content",
            "/v1/get-content/{id}",
            "/v1/get-content/by/title",
            "/v1/update-content/{id}",
            "/v1/delete-content/{id}",
        ] {
            assert!(json["paths"].get(path).is_some(), "missing {path}");
        }
    }
}
