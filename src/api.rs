//! Thin, typed REST client over the backend API.
//!
//! One base URL, JSON bodies, and an optional bearer token injected on
//! every request. Callers never touch `reqwest` types directly; failures
//! surface as [`ApiError`] with the server-provided message extracted from
//! JSON error bodies, and list responses are resolved from their
//! envelope-or-array union at this boundary.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::resource::EntityId;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Paginated-or-bare list response.
///
/// List endpoints answer with either a pagination envelope or a bare JSON
/// array depending on the backend's settings for that collection. The union
/// is resolved to a plain `Vec` via [`ListPayload::into_items`] right at the
/// fetch call; the ambiguity never travels further into the crate.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    /// `{count, next, previous, results}` pagination envelope.
    Paginated {
        /// Total number of records across all pages.
        count: u64,
        /// URL of the next page, if any.
        next: Option<String>,
        /// URL of the previous page, if any.
        previous: Option<String>,
        /// The records on this page.
        results: Vec<T>,
    },
    /// Bare JSON array.
    Plain(Vec<T>),
}

impl<T> ListPayload<T> {
    /// Resolve to the canonical in-memory list shape.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paginated { results, .. } => results,
            Self::Plain(items) => items,
        }
    }
}

/// Shape of JSON error bodies. Backends send `message` or `detail`.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
    detail: Option<String>,
}

/// Typed async client for the versioned REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for the given versioned base URL
    /// (e.g. `http://localhost:3000/api`). A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach a bearer token sent in the `Authorization` header of every
    /// subsequent request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.http.request(method, self.url(path));
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Map a non-success response to [`ApiError::Status`], pulling the
    /// `message`/`detail` field out of the JSON error body when present.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message.or(body.detail));
        warn!(status = status.as_u16(), ?message, "backend call failed");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn send<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let response = Self::check_status(req.send().await?).await?;
        Ok(response.json().await?)
    }

    /// `GET {path}`, decoding the JSON response body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        self.send(self.request(reqwest::Method::GET, path)).await
    }

    /// `GET {path}` where 404 means "absent", not "failed".
    ///
    /// Used for optional lookups such as the calling user's employee
    /// profile; every other error still propagates.
    pub async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        match self.get(path).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_status(404) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// `GET` a list endpoint, resolving the envelope-or-array union.
    pub async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        Ok(self.get::<ListPayload<T>>(path).await?.into_items())
    }

    /// `POST {path}` with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        self.send(self.request(reqwest::Method::POST, path).json(body))
            .await
    }

    /// `PUT {path}` with a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "PUT");
        self.send(self.request(reqwest::Method::PUT, path).json(body))
            .await
    }

    /// `PATCH {path}` with a partial JSON body.
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "PATCH");
        self.send(self.request(reqwest::Method::PATCH, path).json(body))
            .await
    }

    /// `DELETE {path}`. The response body, if any, is discarded.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        debug!(path, "DELETE");
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Invoke an action sub-resource: `POST /{collection}/{id}/{verb}/`.
    ///
    /// Domain verbs (`approve`, `reject`, `assign_manager`, `mark_as_paid`)
    /// all go through here.
    pub async fn post_action<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: EntityId,
        verb: &str,
        body: &Value,
    ) -> Result<T, ApiError> {
        self.post(&format!("{collection}/{id}/{verb}/"), body).await
    }
}
