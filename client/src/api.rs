//! Service abstraction injected into the store environment

use crate::error::ServiceError;
use crate::types::{TodoId, TodoRecord};
use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by [`TodoApi`] methods
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ServiceError>> + Send + 'a>>;

/// The four operations of the remote todo service
///
/// Methods return boxed futures rather than using `async fn` so the trait
/// stays object-safe; the store environment holds implementations as
/// `Arc<dyn TodoApi>`. None of the operations retries, and a call that has
/// been issued always runs to completion.
pub trait TodoApi: Send + Sync {
    /// Fetch the entire collection, in server order
    fn list_all(&self) -> ApiFuture<'_, Vec<TodoRecord>>;

    /// Create a record with the given title; the service assigns the id
    fn create(&self, title: String) -> ApiFuture<'_, TodoRecord>;

    /// Replace the title of the record with the given id
    fn update(&self, id: TodoId, title: String) -> ApiFuture<'_, TodoRecord>;

    /// Delete the record with the given id, returning that id on success
    fn remove(&self, id: TodoId) -> ApiFuture<'_, TodoId>;
}
