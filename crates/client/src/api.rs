//! Typed access to the notebook Content API.
//!
//! [`ContentApi`] has one method per server operation. [`HttpContentClient`]
//! implements it over HTTP with `reqwest`; the screen state in this crate is
//! generic over the trait so it can be driven by any implementation.
//!
//! The client is deliberately thin: no caching, no retries and no request
//! deduplication. A non-2xx response becomes [`ClientError::Api`] carrying the
//! server's `message`.

use api_shared::{
    ContentPageRes, ContentRes, CreateContentReq, ListContentRes, MessageRes, UpdateContentReq,
};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

use crate::{ClientError, ClientResult};

/// Operations of the Content API.
#[allow(async_fn_in_trait)]
pub trait ContentApi {
    async fn create_content(&self, req: &CreateContentReq) -> ClientResult<ContentRes>;

    /// Every record, in store insertion order.
    async fn list_content(&self) -> ClientResult<Vec<ContentRes>>;

    /// One page of records with the server-reported page count.
    async fn list_content_page(&self, page: usize, per_page: usize) -> ClientResult<ContentPageRes>;

    async fn get_content_by_id(&self, id: &str) -> ClientResult<ContentRes>;

    /// Exact, case-sensitive title lookup.
    async fn get_content_by_title(&self, title: &str) -> ClientResult<ContentRes>;

    async fn update_content(&self, id: &str, req: &UpdateContentReq) -> ClientResult<ContentRes>;

    async fn delete_content(&self, id: &str) -> ClientResult<MessageRes>;
}

/// HTTP implementation of [`ContentApi`].
#[derive(Clone, Debug)]
pub struct HttpContentClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpContentClient {
    /// Creates a client for the server at `base_url` (e.g. `http://localhost:5000`).
    ///
    /// # Errors
    /// [`ClientError::InvalidBaseUrl`] if `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let parsed =
            Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_string()))?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `<base>/v1/<segments...>`, with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("v1")
            .extend(segments);
        Ok(url)
    }
}

/// Parses a success body as `T`, or turns an error status into
/// [`ClientError::Api`].
async fn read_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(ClientError::Decode);
    }

    let message = match response.json::<MessageRes>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    tracing::debug!("content api returned {}: {}", status, message);
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

impl ContentApi for HttpContentClient {
    async fn create_content(&self, req: &CreateContentReq) -> ClientResult<ContentRes> {
        let response = self
            .http
            .post(self.endpoint(&["push-content"])?)
            .json(req)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        read_json(response).await
    }

    async fn list_content(&self) -> ClientResult<Vec<ContentRes>> {
        let response = self
            .http
            .get(self.endpoint(&["get-content"])?)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        Ok(read_json::<ListContentRes>(response).await?.into_records())
    }

    async fn list_content_page(&self, page: usize, per_page: usize) -> ClientResult<ContentPageRes> {
        let response = self
            .http
            .get(self.endpoint(&["get-content"])?)
            .query(&[("page", page), ("per_page", per_page)])
            .send()
            .await
            .map_err(ClientError::Transport)?;
        match read_json::<ListContentRes>(response).await? {
            ListContentRes::Page(page) => Ok(page),
            ListContentRes::All(_) => Err(ClientError::UnexpectedResponse(
                "server ignored pagination parameters".into(),
            )),
        }
    }

    async fn get_content_by_id(&self, id: &str) -> ClientResult<ContentRes> {
        let response = self
            .http
            .get(self.endpoint(&["get-content", id])?)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        read_json(response).await
    }

    async fn get_content_by_title(&self, title: &str) -> ClientResult<ContentRes> {
        let response = self
            .http
            .get(self.endpoint(&["get-content", "by", "title"])?)
            .query(&[("title", title)])
            .send()
            .await
            .map_err(ClientError::Transport)?;
        read_json(response).await
    }

    async fn update_content(&self, id: &str, req: &UpdateContentReq) -> ClientResult<ContentRes> {
        let response = self
            .http
            .put(self.endpoint(&["update-content", id])?)
            .json(req)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        read_json(response).await
    }

    async fn delete_content(&self, id: &str) -> ClientResult<MessageRes> {
        let response = self
            .http
            .delete(self.endpoint(&["delete-content", id])?)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        read_json(response).await
    }
}
