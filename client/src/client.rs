//! REST client implementation for the remote todo service

use crate::api::{ApiFuture, TodoApi};
use crate::error::ServiceError;
use crate::types::{TodoId, TodoRecord};
use reqwest::Client;
use serde::Serialize;

/// Default service endpoint used when [`BASE_URL_ENV`] is unset
pub const DEFAULT_BASE_URL: &str =
    "https://6454008bc18adbbdfead590d.mockapi.io/api/v1/api_todolist";

/// Environment variable consulted by [`TodoServiceClient::from_env`]
pub const BASE_URL_ENV: &str = "TODO_SERVICE_URL";

#[derive(Serialize)]
struct TitleBody<'a> {
    title: &'a str,
}

/// REST client for the remote todo service
///
/// Issues the four collection operations against a fixed base resource URL
/// and decodes JSON responses. There are no retries and no explicit
/// timeouts; whatever the underlying HTTP stack defaults to applies.
#[derive(Clone, Debug)]
pub struct TodoServiceClient {
    http: Client,
    base_url: String,
}

impl TodoServiceClient {
    /// Create a client against the given base resource URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client reusing an existing `reqwest` client
    #[must_use]
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    /// Create a client configured from the environment
    ///
    /// Reads the base URL from `TODO_SERVICE_URL`, falling back to
    /// [`DEFAULT_BASE_URL`] when the variable is unset.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Config`] if the variable is set but blank.
    pub fn from_env() -> Result<Self, ServiceError> {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if url.trim().is_empty() => Err(ServiceError::Config(format!(
                "{BASE_URL_ENV} is set but empty"
            ))),
            Ok(url) => Ok(Self::new(url)),
            Err(_) => Ok(Self::new(DEFAULT_BASE_URL)),
        }
    }

    /// Base resource URL this client talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: &TodoId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Fetch all todo records, in server order
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Transport`] on network failure,
    /// [`ServiceError::Status`] on a non-success response and
    /// [`ServiceError::Decode`] if the body is not a record array.
    pub async fn list_all(&self) -> Result<Vec<TodoRecord>, ServiceError> {
        tracing::debug!(url = %self.base_url, "listing todos");
        let response = self
            .http
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        decode(response).await
    }

    /// Create a record with the given title
    ///
    /// The service assigns the id; the decoded response is authoritative
    /// and may differ from the submitted title.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::list_all`].
    pub async fn create(&self, title: &str) -> Result<TodoRecord, ServiceError> {
        tracing::debug!(url = %self.base_url, "creating todo");
        let response = self
            .http
            .post(&self.base_url)
            .json(&TitleBody { title })
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        decode(response).await
    }

    /// Replace the title of the record with the given id
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::list_all`]; an unknown id surfaces as the
    /// service's not-found status.
    pub async fn update(&self, id: &TodoId, title: &str) -> Result<TodoRecord, ServiceError> {
        let url = self.item_url(id);
        tracing::debug!(url = %url, "updating todo");
        let response = self
            .http
            .put(url)
            .json(&TitleBody { title })
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        decode(response).await
    }

    /// Delete the record with the given id
    ///
    /// The response body carries nothing of interest, so the input id is
    /// echoed back on success.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Transport`] on network failure and
    /// [`ServiceError::Status`] on a non-success response.
    pub async fn remove(&self, id: TodoId) -> Result<TodoId, ServiceError> {
        let url = self.item_url(&id);
        tracing::debug!(url = %url, "deleting todo");
        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(id)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Decode a JSON success body, folding failures into [`ServiceError`]
async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ServiceError> {
    let status = response.status();
    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ServiceError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

impl TodoApi for TodoServiceClient {
    fn list_all(&self) -> ApiFuture<'_, Vec<TodoRecord>> {
        Box::pin(Self::list_all(self))
    }

    fn create(&self, title: String) -> ApiFuture<'_, TodoRecord> {
        Box::pin(async move { Self::create(self, &title).await })
    }

    fn update(&self, id: TodoId, title: String) -> ApiFuture<'_, TodoRecord> {
        Box::pin(async move { Self::update(self, &id, &title).await })
    }

    fn remove(&self, id: TodoId) -> ApiFuture<'_, TodoId> {
        Box::pin(Self::remove(self, id))
    }
}
